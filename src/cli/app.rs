//! Main app runner for one-shot mode

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;

use super::args::ExportOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one label export against the running Audacity instance
#[cfg(unix)]
pub async fn run_oneshot(options: ExportOptions) -> ExitCode {
    use std::sync::{Arc, Mutex};

    use crate::application::{ExportCallbacks, ExportLabelsInput, ExportLabelsUseCase};
    use crate::infrastructure::{AudacityPipe, FsLabelStore, PipePath};

    let presenter = Arc::new(Mutex::new(Presenter::new()));

    // Locate the pipes; fail fast before opening anything
    let pipe_path = PipePath::new();
    {
        let p = presenter.lock().unwrap();
        p.info(&format!("Write to:  {}", pipe_path.to_path().display()));
        p.info(&format!("Read from: {}", pipe_path.from_path().display()));

        if let Some(missing) = pipe_path.missing() {
            p.error(&format!(
                "{} does not exist. Ensure Audacity is running with mod-script-pipe enabled.",
                missing.display()
            ));
            return ExitCode::from(EXIT_ERROR);
        }
    }

    let script = match AudacityPipe::connect(&pipe_path, options.response_timeout).await {
        Ok(pipe) => pipe,
        Err(e) => {
            presenter.lock().unwrap().error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let labels = FsLabelStore::new(options.export_timeout);
    let mut use_case = ExportLabelsUseCase::new(script, labels);

    let input = ExportLabelsInput {
        basename: options.basename.clone(),
        input_dir: options.input_dir.clone(),
        label_dir: options.label_dir.clone(),
        export_filename: options.export_filename.clone(),
        silence: options.silence,
    };

    let wait_presenter = Arc::clone(&presenter);
    let callbacks = ExportCallbacks {
        on_command: Some(Box::new(|cmd| {
            eprintln!(">>> {}", cmd);
        })),
        on_response: Some(Box::new(|response| {
            for line in response.as_str().lines() {
                eprintln!("<<< {}", line);
            }
        })),
        on_export_wait: Some(Box::new(move || {
            wait_presenter
                .lock()
                .unwrap()
                .start_spinner("Waiting for label export...");
        })),
    };

    tokio::select! {
        result = use_case.execute(input, callbacks) => match result {
            Ok(output) => {
                let mut p = presenter.lock().unwrap();
                p.spinner_success(&format!(
                    "Labels written after {} commands",
                    output.commands_sent
                ));
                p.output(&output.label_path.display().to_string());
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.lock().unwrap().spinner_fail(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            let mut p = presenter.lock().unwrap();
            p.spinner_fail("Interrupted");
            p.warn("Audacity may be left mid-workflow");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(not(unix))]
pub async fn run_oneshot(_options: ExportOptions) -> ExitCode {
    let presenter = Presenter::new();
    presenter.error("mod-script-pipe fifos are only supported on unix platforms");
    ExitCode::from(EXIT_ERROR)
}

/// Load and merge configuration from defaults, file, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli (env vars arrive through clap)
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
