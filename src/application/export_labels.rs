//! Export labels use case

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::scripting::{label_path, wav_path, Command, Response, SilenceParams};

use super::ports::{LabelStore, LabelStoreError, ScriptConnection, ScriptError};

/// Errors from the export labels use case
#[derive(Debug, Error)]
pub enum ExportLabelsError {
    #[error("Scripting command failed: {0}")]
    Script(#[from] ScriptError),

    #[error("Label collection failed: {0}")]
    Labels(#[from] LabelStoreError),
}

/// Input parameters for the export labels use case
#[derive(Debug, Clone)]
pub struct ExportLabelsInput {
    /// Extension-less base name of the wav file to label
    pub basename: String,
    /// Directory holding `{basename}.wav`
    pub input_dir: PathBuf,
    /// Directory Audacity exports to, and where the renamed file lands
    pub label_dir: PathBuf,
    /// Filename Audacity writes on ExportLabels
    pub export_filename: String,
    /// Silence-detection thresholds
    pub silence: SilenceParams,
}

/// Output from the export labels use case
#[derive(Debug, Clone)]
pub struct ExportLabelsOutput {
    /// Final path of the renamed label file
    pub label_path: PathBuf,
    /// Number of commands issued
    pub commands_sent: usize,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct ExportCallbacks {
    /// Called just before each command is sent
    pub on_command: Option<Box<dyn Fn(&Command) + Send + Sync>>,
    /// Called with each response received
    pub on_response: Option<Box<dyn Fn(&Response) + Send + Sync>>,
    /// Called once all commands are through and the export wait begins
    pub on_export_wait: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot label export workflow.
///
/// Owns both the scripting connection and the label store for the lifetime
/// of the run, so the pipe handles stay valid across all five commands.
/// Not designed for concurrent or repeated invocations within one process:
/// the pipe protocol has no request identifiers, only strict alternation.
pub struct ExportLabelsUseCase<S, L>
where
    S: ScriptConnection,
    L: LabelStore,
{
    script: S,
    labels: L,
}

impl<S, L> ExportLabelsUseCase<S, L>
where
    S: ScriptConnection,
    L: LabelStore,
{
    /// Create a new use case instance
    pub fn new(script: S, labels: L) -> Self {
        Self { script, labels }
    }

    /// Execute the export workflow: five commands in fixed order, then
    /// collect the exported label file under its per-input name.
    pub async fn execute(
        &mut self,
        input: ExportLabelsInput,
        callbacks: ExportCallbacks,
    ) -> Result<ExportLabelsOutput, ExportLabelsError> {
        let wav = wav_path(&input.input_dir, &input.basename);
        let export = input.label_dir.join(&input.export_filename);
        let dest = label_path(&input.label_dir, &input.basename);

        let sequence = [
            Command::New,
            Command::import(wav),
            Command::SelectAll,
            Command::SoundFinder(input.silence),
            Command::ExportLabels,
        ];

        let mut commands_sent = 0;
        for command in &sequence {
            if let Some(ref cb) = callbacks.on_command {
                cb(command);
            }

            let response = self.script.execute(command).await?;
            commands_sent += 1;

            if let Some(ref cb) = callbacks.on_response {
                cb(&response);
            }
        }

        if let Some(ref cb) = callbacks.on_export_wait {
            cb();
        }

        self.labels.collect(&export, &dest).await?;

        Ok(ExportLabelsOutput {
            label_path: dest,
            commands_sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    // Mock implementations for testing
    #[derive(Default)]
    struct MockScript {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ScriptConnection for MockScript {
        async fn execute(&mut self, command: &Command) -> Result<Response, ScriptError> {
            self.sent.lock().unwrap().push(command.to_string());
            Ok(Response::new(format!("{command}\nBatchCommand finished: OK\n")))
        }
    }

    #[derive(Default)]
    struct MockLabels {
        collected: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    }

    #[async_trait]
    impl LabelStore for MockLabels {
        async fn collect(&self, source: &Path, dest: &Path) -> Result<(), LabelStoreError> {
            self.collected
                .lock()
                .unwrap()
                .push((source.to_path_buf(), dest.to_path_buf()));
            Ok(())
        }
    }

    struct FailingLabels;

    #[async_trait]
    impl LabelStore for FailingLabels {
        async fn collect(&self, source: &Path, _dest: &Path) -> Result<(), LabelStoreError> {
            Err(LabelStoreError::NotFound {
                path: source.display().to_string(),
                timeout_secs: 10,
            })
        }
    }

    fn sample_input() -> ExportLabelsInput {
        ExportLabelsInput {
            basename: "sample1".to_string(),
            input_dir: PathBuf::from("/fixed/dir"),
            label_dir: PathBuf::from("/fixed/dir"),
            export_filename: "Label Track.txt".to_string(),
            silence: SilenceParams::default(),
        }
    }

    #[tokio::test]
    async fn execute_sends_exact_command_sequence() {
        let script = MockScript::default();
        let sent = Arc::clone(&script.sent);
        let mut use_case = ExportLabelsUseCase::new(script, MockLabels::default());

        let output = use_case
            .execute(sample_input(), ExportCallbacks::default())
            .await
            .unwrap();

        assert_eq!(
            *sent.lock().unwrap(),
            vec![
                "New:",
                "Import2: Filename=/fixed/dir/sample1.wav",
                "SelectAll:",
                "SoundFinder: sil-lev=12 sil-dur=100",
                "ExportLabels:",
            ]
        );
        assert_eq!(output.commands_sent, 5);
    }

    #[tokio::test]
    async fn execute_collects_export_under_basename() {
        let labels = MockLabels::default();
        let collected = Arc::clone(&labels.collected);
        let mut use_case = ExportLabelsUseCase::new(MockScript::default(), labels);

        let output = use_case
            .execute(sample_input(), ExportCallbacks::default())
            .await
            .unwrap();

        let moves = collected.lock().unwrap();
        assert_eq!(
            *moves,
            vec![(
                PathBuf::from("/fixed/dir/Label Track.txt"),
                PathBuf::from("/fixed/dir/sample1.txt"),
            )]
        );
        assert_eq!(output.label_path, PathBuf::from("/fixed/dir/sample1.txt"));
    }

    #[tokio::test]
    async fn execute_propagates_missing_export() {
        let mut use_case = ExportLabelsUseCase::new(MockScript::default(), FailingLabels);

        let err = use_case
            .execute(sample_input(), ExportCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExportLabelsError::Labels(LabelStoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn callbacks_fire_per_command() {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(Mutex::new(0usize));

        let commands_cb = Arc::clone(&commands);
        let responses_cb = Arc::clone(&responses);
        let callbacks = ExportCallbacks {
            on_command: Some(Box::new(move |cmd| {
                commands_cb.lock().unwrap().push(cmd.to_string());
            })),
            on_response: Some(Box::new(move |_| {
                *responses_cb.lock().unwrap() += 1;
            })),
            on_export_wait: None,
        };

        let mut use_case = ExportLabelsUseCase::new(MockScript::default(), MockLabels::default());
        use_case.execute(sample_input(), callbacks).await.unwrap();

        assert_eq!(commands.lock().unwrap().len(), 5);
        assert_eq!(*responses.lock().unwrap(), 5);
    }
}
