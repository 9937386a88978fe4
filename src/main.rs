use clap::error::ErrorKind;
use clap::Parser;
use flip_nums::utils::logger;
use flip_nums::{flip_files, CliConfig, FlipError, LocalStorage};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // help and version also arrive as clap errors
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(
                    FlipError::Usage {
                        message: e.to_string(),
                    }
                    .exit_code(),
                ),
            };
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let storage = LocalStorage::new();
    match flip_files(&storage, config.strategy, &config.input, &config.output) {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} integers to {} (capacity {})",
                summary.count,
                config.output.display(),
                summary.capacity
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Flip failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}
