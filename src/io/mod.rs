pub mod demand;
pub mod labels;
pub mod reporting;
