use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use leveling_mps::io::{demand, labels::Locale, reporting};
use leveling_mps::model::demand_table::partition;
use leveling_mps::{logging, PlanSnapshot, PlanningConfig, PlanningEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leveling-mps")]
#[command(about = "Leveled master production schedule calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the seeded demand grid as CSV so it can be edited
    Template {
        #[command(flatten)]
        inputs: InputArgs,

        /// Where to write the grid
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Level production and project stock
    Plan {
        #[command(flatten)]
        inputs: InputArgs,

        /// Edited demand grid produced by `template`
        #[arg(long)]
        grid: Option<PathBuf>,

        /// Inline demand per period, e.g. 5,15,10
        #[arg(long, conflicts_with = "grid")]
        demand: Option<String>,

        /// Write the result table to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write chart series and labels to this JSON file
        #[arg(long)]
        chart: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with planning inputs; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of planning periods
    #[arg(long)]
    periods: Option<usize>,

    /// Total demand used to seed the grid
    #[arg(long)]
    total_demand: Option<u32>,

    /// Stock on hand before period 1
    #[arg(long)]
    init_stock: Option<u32>,

    /// Grid segment width (1-8)
    #[arg(long)]
    max_columns: Option<usize>,

    /// Label language: en or zh-tw
    #[arg(long)]
    locale: Option<Locale>,
}

impl InputArgs {
    fn load(&self) -> anyhow::Result<PlanningConfig> {
        let mut config = match &self.config {
            Some(path) => PlanningConfig::from_json_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => PlanningConfig::default(),
        };

        if let Some(periods) = self.periods {
            config.num_periods = periods;
        }
        if let Some(total) = self.total_demand {
            config.total_demand = total;
        }
        if let Some(stock) = self.init_stock {
            config.initial_stock = stock;
        }
        if let Some(width) = self.max_columns {
            config.max_columns = width;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Template { inputs, output } => {
            let config = inputs.load()?;
            let table = config.seed_table()?;
            demand::write_demand_grid(&output, &table, config.locale)
                .with_context(|| format!("writing demand grid {}", output.display()))?;
            println!("Demand grid written to {}", output.display());
        }

        Commands::Plan {
            inputs,
            grid,
            demand: inline,
            output,
            chart,
        } => {
            let mut config = inputs.load()?;

            let table = if let Some(path) = grid {
                demand::read_demand_grid(&path)
                    .with_context(|| format!("reading demand grid {}", path.display()))?
            } else if let Some(list) = inline {
                let values = demand::parse_demand_list(&list)?;
                if inputs.periods.is_none() {
                    config.num_periods = values.len();
                }
                config.validate()?;
                partition(&values, config.max_columns)?
            } else {
                config.seed_table()?
            };

            let snapshot = PlanSnapshot {
                config: config.clone(),
                demand: table,
            };
            let outcome = PlanningEngine::default()
                .recompute(&snapshot)
                .context("planning failed")?;

            println!("=== Leveled Production Schedule ===");
            print!("{}", reporting::render_table(&outcome.table));
            println!();
            print!("{}", reporting::render_summary(&outcome.table.summary()));

            if let Some(path) = output {
                reporting::write_result_table(&path, &outcome.table)
                    .with_context(|| format!("writing results {}", path.display()))?;
            }
            if let Some(path) = chart {
                reporting::write_chart_json(&path, &outcome.table, config.locale)
                    .with_context(|| format!("writing chart {}", path.display()))?;
            }
        }
    }

    Ok(())
}
