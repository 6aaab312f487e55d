//! Fifo transport for Audacity's mod-script-pipe

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::pipe;

use crate::application::ports::{ScriptConnection, ScriptError};
use crate::domain::scripting::{Command, Response};

/// Pipe path resolver
///
/// mod-script-pipe creates one fifo pair per user under the system temp
/// directory. This program never creates or removes them; if either is
/// missing, Audacity is not ready and the run must fail before opening.
#[derive(Debug, Clone)]
pub struct PipePath {
    to: PathBuf,
    from: PathBuf,
}

impl PipePath {
    /// Resolve both pipe paths from the current user's uid
    pub fn new() -> Self {
        let uid = nix::unistd::Uid::current();
        let tmp = std::env::temp_dir();
        Self {
            to: tmp.join(format!("audacity_script_pipe.to.{uid}")),
            from: tmp.join(format!("audacity_script_pipe.from.{uid}")),
        }
    }

    /// Create from explicit paths (used by tests against mock fifos)
    pub fn from_parts(to: impl Into<PathBuf>, from: impl Into<PathBuf>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
        }
    }

    /// Path commands are written to
    pub fn to_path(&self) -> &Path {
        &self.to
    }

    /// Path responses are read from
    pub fn from_path(&self) -> &Path {
        &self.from
    }

    /// First pipe path that does not exist on the filesystem, if any
    pub fn missing(&self) -> Option<&Path> {
        [&self.to, &self.from]
            .into_iter()
            .find(|p| !p.exists())
            .map(PathBuf::as_path)
    }
}

impl Default for PipePath {
    fn default() -> Self {
        Self::new()
    }
}

/// Scripting connection over the mod-script-pipe fifo pair.
///
/// Owns both handles for the lifetime of the run. The protocol is strict
/// alternation, so a single reader/writer pair is all there is to hold.
pub struct AudacityPipe {
    writer: pipe::Sender,
    reader: BufReader<pipe::Receiver>,
    response_timeout: Duration,
}

impl AudacityPipe {
    /// Verify both pipes exist, then open the outbound end for writing and
    /// the inbound end for reading.
    ///
    /// Opening the write end fails if Audacity is not holding the read end
    /// open; that surfaces as an open error rather than a hang.
    pub async fn connect(
        paths: &PipePath,
        response_timeout: Duration,
    ) -> Result<Self, ScriptError> {
        if let Some(path) = paths.missing() {
            return Err(ScriptError::PipeMissing {
                path: path.display().to_string(),
            });
        }

        let writer = pipe::OpenOptions::new()
            .open_sender(paths.to_path())
            .map_err(|source| ScriptError::Open {
                path: paths.to_path().display().to_string(),
                source,
            })?;

        let receiver = pipe::OpenOptions::new()
            .open_receiver(paths.from_path())
            .map_err(|source| ScriptError::Open {
                path: paths.from_path().display().to_string(),
                source,
            })?;

        Ok(Self {
            writer,
            reader: BufReader::new(receiver),
            response_timeout,
        })
    }

    /// Write one command line and flush so Audacity sees it promptly
    async fn send_command(&mut self, command: &Command) -> Result<(), ScriptError> {
        self.writer
            .write_all(format!("{command}\n").as_bytes())
            .await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ScriptConnection for AudacityPipe {
    async fn execute(&mut self, command: &Command) -> Result<Response, ScriptError> {
        self.send_command(command).await?;

        let response = tokio::time::timeout(self.response_timeout, read_response(&mut self.reader))
            .await
            .map_err(|_| ScriptError::ResponseTimeout {
                timeout_secs: self.response_timeout.as_secs(),
            })??;

        Ok(response)
    }
}

/// Accumulate lines until a blank line follows at least one accumulated
/// character.
///
/// A blank line arriving while the accumulator is empty is appended rather
/// than treated as a terminator, so a response whose payload starts after a
/// leading blank line is read in full. The terminating blank line itself is
/// not included, and nothing past it is consumed.
async fn read_response<R>(reader: &mut R) -> io::Result<Response>
where
    R: AsyncBufRead + Unpin,
{
    let mut text = String::new();
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "pipe closed before response terminator",
            ));
        }
        if line == "\n" && !text.is_empty() {
            return Ok(Response::new(text));
        }
        text.push_str(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_from(bytes: &'static [u8]) -> (io::Result<Response>, BufReader<&'static [u8]>) {
        let mut reader = BufReader::new(bytes);
        let result = read_response(&mut reader).await;
        (result, reader)
    }

    #[tokio::test]
    async fn terminates_at_first_blank_line_after_content() {
        let (response, _) = read_from(b"New:\nBatchCommand finished: OK\n\n").await;
        assert_eq!(
            response.unwrap().as_str(),
            "New:\nBatchCommand finished: OK\n"
        );
    }

    #[tokio::test]
    async fn leading_blank_line_is_not_a_terminator() {
        let (response, _) = read_from(b"\ncontent\n\n").await;
        let response = response.unwrap();
        assert!(response.as_str().contains("content"));
    }

    #[tokio::test]
    async fn does_not_consume_past_the_terminator() {
        let (response, mut reader) = read_from(b"one\ntwo\nthree\n\ntrailing\n").await;
        assert_eq!(response.unwrap().as_str(), "one\ntwo\nthree\n");

        let mut rest = String::new();
        reader.read_line(&mut rest).await.unwrap();
        assert_eq!(rest, "trailing\n");
    }

    #[tokio::test]
    async fn eof_before_terminator_is_an_error() {
        let (response, _) = read_from(b"partial response").await;
        let err = response.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn pipe_paths_are_uid_scoped() {
        let paths = PipePath::new();
        let uid = nix::unistd::Uid::current().to_string();
        let to = paths.to_path().to_string_lossy().to_string();
        let from = paths.from_path().to_string_lossy().to_string();
        assert!(to.contains("audacity_script_pipe.to."));
        assert!(to.ends_with(&uid));
        assert!(from.contains("audacity_script_pipe.from."));
        assert!(from.ends_with(&uid));
    }

    #[test]
    fn missing_reports_absent_pipe() {
        let paths = PipePath::from_parts("/nonexistent/to", "/nonexistent/from");
        assert_eq!(paths.missing(), Some(Path::new("/nonexistent/to")));
    }
}
