// src/io/labels.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for grid headers and chart text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    ZhTw,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Ok(Locale::En),
            "zh-tw" | "zh" => Ok(Locale::ZhTw),
            other => Err(format!("unsupported locale '{other}' (expected en or zh-tw)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::ZhTw => write!(f, "zh-tw"),
        }
    }
}

/// Header for a real period column. `period` is 1-based.
pub fn period_column(locale: Locale, period: usize) -> String {
    match locale {
        Locale::En => format!("Week {period}"),
        Locale::ZhTw => format!("第{period}週"),
    }
}

/// Header for a padding column. Same in every locale.
pub fn placeholder_column(index: usize) -> String {
    format!("N{index}")
}

/// Text a renderer needs to draw the demand/production/stock chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub demand: String,
    pub production: String,
    pub stock: String,
}

impl ChartLabels {
    pub fn for_locale(locale: Locale) -> Self {
        let (title, x_axis, y_axis, demand, production, stock) = match locale {
            Locale::En => (
                "Demand forecast vs. leveled production",
                "Period",
                "Quantity",
                "Demand forecast",
                "Leveled production",
                "Projected stock",
            ),
            Locale::ZhTw => (
                "需求預測 vs. 平準化生產",
                "週期",
                "數量",
                "需求預測",
                "平準化生產",
                "預計庫存",
            ),
        };

        Self {
            title: title.to_string(),
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
            demand: demand.to_string(),
            production: production.to_string(),
            stock: stock.to_string(),
        }
    }
}
