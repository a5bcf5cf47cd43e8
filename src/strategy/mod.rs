pub mod leveling;
pub mod traits;
