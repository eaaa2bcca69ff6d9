use crate::utils::error::Result;
use crate::utils::parse::parse_operand;
use crate::utils::validation::{validate_finite, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "number-cruncher")]
#[command(about = "Adds and verifies numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results and logs as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two numbers
    Add {
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        x: f64,
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        y: f64,
    },
    /// Ask the verifier whether GOT is acceptable for WANT
    Verify {
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        got: f64,
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        want: f64,
    },
    /// Add X and Y, then verify the sum against WANT
    Check {
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        x: f64,
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        y: f64,
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        want: f64,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.command {
            Command::Add { x, y } => {
                validate_finite("x", x)?;
                validate_finite("y", y)
            }
            Command::Verify { got, want } => {
                validate_finite("got", got)?;
                validate_finite("want", want)
            }
            Command::Check { x, y, want } => {
                validate_finite("x", x)?;
                validate_finite("y", y)?;
                validate_finite("want", want)
            }
        }
    }
}
