//! Entry point for the translation file generator.

use std::path::Path;
use std::process::ExitCode;

use pipbox_translation_generator::config;
use pipbox_translation_generator::generator;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let settings = match config::resolve(Path::new(".")) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to resolve generator settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generator::run(&settings) {
        Ok(summary) if summary.failures.is_empty() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Translation generation aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
