//! Application entry point and dispatch.

use anyhow::Result;

use fibdrv_cli::output::write_to_file;
use fibdrv_cli::presenter::CLIResultPresenter;
use fibdrv_core::Strategy;
use fibdrv_device::calculator_selection::strategies_to_run;
use fibdrv_device::{
    analyze_comparison_results, execute_calculations, exercise, DeviceOptions, FibDevice,
    ResultPresenter,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        AppConfig::write_completion(shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;

    match config.index {
        Some(index) => run_single(config, index),
        None => run_walk(config),
    }
}

/// Compute one index with the selected strategies and compare them.
fn run_single(config: &AppConfig, index: u64) -> Result<()> {
    let strategies = strategies_to_run(&config.algo)?;
    let results = execute_calculations(&strategies, index, config.digits)?;

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let verdict = analyze_comparison_results(&results);

    for result in &results {
        presenter.present_result(result, config.details);
    }
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }
    verdict?;

    if let Some(path) = &config.output {
        if let Some(result) = results.first() {
            write_to_file(path, &result.decimal)?;
        }
    }
    Ok(())
}

/// Open the device and run the companion client walk.
fn run_walk(config: &AppConfig) -> Result<()> {
    let strategies = strategies_to_run(&config.algo)?;
    // `all` compares both strategies on every read, which is the timed mode.
    let (strategy, timing) = match strategies.as_slice() {
        [only] => (*only, config.timing),
        _ => (Strategy::FastDoubling, true),
    };

    let device = FibDevice::new(
        DeviceOptions {
            max_index: config.max_index,
            strategy,
            timing,
        }
        .normalize(),
    );
    tracing::debug!(?strategy, timing, offset = config.offset, "starting client walk");
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let summary = exercise(&device, config.offset, config.digits, &presenter)?;

    if let Some(path) = &config.output {
        if let Some(top) = &summary.top {
            write_to_file(path, &top.decimal)?;
        }
    }
    Ok(())
}
