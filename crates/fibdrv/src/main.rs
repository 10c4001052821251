//! fibdrv: Fibonacci device model and companion client.

use std::process::ExitCode;

use fibdrv_cli::CLIResultPresenter;
use fibdrv_core::exit_codes;
use fibdrv_device::ResultPresenter;
use fibdrv_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let code = match app::run(&config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            errors::handle_error(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
