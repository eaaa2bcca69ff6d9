pub mod calculator;
pub mod engine;

pub use crate::domain::model::{Calculation, CheckOutcome};
pub use crate::domain::ports::NumberCruncher;
pub use crate::utils::error::Result;
