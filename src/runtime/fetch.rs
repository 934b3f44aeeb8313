use std::io::Read;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::types::{Retrieval, RetrievalError, RuntimeCommand};

const CHUNK_SIZE: usize = 8192;

/// Anything that can produce the captured log text of a named container.
pub trait LogSource {
    fn fetch(&mut self, container: &str) -> Retrieval;
}

/// Fetches logs by running `<runtime> logs <container>`.
#[derive(Debug, Clone)]
pub struct CliLogSource {
    runtime: RuntimeCommand,
}

impl CliLogSource {
    pub fn new(runtime: RuntimeCommand) -> Self {
        Self { runtime }
    }
}

impl LogSource for CliLogSource {
    /// Blocks until the runtime exits. Stdout and stderr are merged into one
    /// buffer in the order their chunks arrive.
    fn fetch(&mut self, container: &str) -> Retrieval {
        let extra = ["logs", container];
        let command = self.runtime.display_with(&extra);
        log::debug!("running `{command}`");

        let mut child = self
            .runtime
            .command(&extra)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RetrievalError::Spawn {
                command: command.clone(),
                source,
            })?;

        let merged = Arc::new(Mutex::new(Vec::new()));
        let readers = [
            child
                .stdout
                .take()
                .map(|out| drain(out, merged.clone(), command.clone())),
            child
                .stderr
                .take()
                .map(|err| drain(err, merged.clone(), command.clone())),
        ];

        let status = child.wait().map_err(|source| RetrievalError::Wait {
            command: command.clone(),
            source,
        })?;

        for reader in readers.into_iter().flatten() {
            let _ = reader.join();
        }

        let output = merged
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default();
        log::debug!("`{command}` exited with {status}, {} bytes", output.len());

        if status.success() {
            Ok(output)
        } else {
            Err(RetrievalError::Exit {
                command,
                status,
                output,
            })
        }
    }
}

/// Copy raw chunks from a child pipe into the shared buffer until EOF.
///
/// A read error ends the copy early; whatever arrived so far is kept.
fn drain<R: Read + Send + 'static>(
    mut pipe: R,
    buf: Arc<Mutex<Vec<u8>>>,
    command: String,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match pipe.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    if let Ok(mut buf) = buf.lock() {
                        buf.extend_from_slice(&chunk[..n]);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("output of `{command}` may be truncated: {e}");
                    break;
                }
            }
        }
    })
}
