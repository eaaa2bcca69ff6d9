pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Command, CliConfig};

pub use core::{
    calculator::{add, verify, Calculator},
    engine::CrunchEngine,
};
pub use domain::{
    model::{Calculation, CheckOutcome},
    ports::NumberCruncher,
};
pub use utils::error::{CrunchError, Result};
