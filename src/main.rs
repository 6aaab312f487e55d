//! SoundLabeler CLI entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use sound_labeler::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, ExportOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use sound_labeler::domain::config::AppConfig;
use sound_labeler::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Clap guarantees a basename when no subcommand is given
    let basename = match cli.basename {
        Some(name) => name,
        None => {
            presenter.error("Missing required argument <BASENAME>");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        input_dir: cli.input_dir,
        label_dir: cli.label_dir,
        export_filename: None,
        sil_lev: cli.sil_lev,
        sil_dur: cli.sil_dur,
        export_timeout_secs: cli.export_timeout,
        response_timeout_secs: cli.response_timeout,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = ExportOptions {
        basename,
        input_dir: config.input_dir_or_default(),
        label_dir: config.label_dir_or_default(),
        export_filename: config.export_filename_or_default().to_string(),
        silence: config.silence_or_default(),
        export_timeout: config.export_timeout_or_default(),
        response_timeout: config.response_timeout_or_default(),
    };

    // Guard against a zero timeout sneaking in from config
    if options.export_timeout == Duration::ZERO {
        presenter.error("export_timeout_secs must be greater than zero");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    run_oneshot(options).await
}
