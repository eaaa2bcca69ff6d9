use clap::Parser;
use number_cruncher::utils::{logger, output::write_result, validation::Validate};
use number_cruncher::{Calculator, CliConfig, Command, CrunchEngine, CrunchError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(2);
    }

    let engine = CrunchEngine::new(Calculator::new());
    let mut stdout = std::io::stdout().lock();

    let result = match config.command {
        Command::Add { x, y } => {
            let calculation = engine.sum(x, y);
            write_result(&mut stdout, &calculation, config.json, || {
                calculation.sum.to_string()
            })
        }
        Command::Verify { got, want } => {
            let verified = engine.verify(got, want);
            write_result(&mut stdout, &verified, config.json, || verified.to_string())
        }
        Command::Check { x, y, want } => engine.check(x, y, want).and_then(|outcome| {
            write_result(&mut stdout, &outcome, config.json, || {
                format!("{} + {} = {} (verified)", x, y, outcome.calculation.sum)
            })
        }),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("{}", e.user_friendly_message());

        let exit_code = match e {
            CrunchError::VerificationFailed { .. } => 1,
            CrunchError::InvalidNumber { .. } | CrunchError::InvalidValue { .. } => 2,
            CrunchError::SerializationError(_) | CrunchError::IoError(_) => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
