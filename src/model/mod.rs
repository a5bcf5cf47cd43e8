pub mod demand_table;
pub mod plan;
pub mod result;
pub mod validation;
