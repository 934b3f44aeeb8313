use std::fmt;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, bail};

/// The program (plus leading arguments) used to talk to the container runtime,
/// e.g. `docker` or `sudo docker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    program: String,
    args: Vec<String>,
}

impl RuntimeCommand {
    /// Split a shell-style command string into program and arguments.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut words = shell_words::split(raw)
            .with_context(|| format!("cannot parse runtime command {raw:?}"))?;
        if words.is_empty() {
            bail!("runtime command is empty");
        }
        let program = words.remove(0);
        Ok(Self {
            program,
            args: words,
        })
    }

    /// Leading arguments followed by `extra`.
    pub fn args_with(&self, extra: &[&str]) -> Vec<String> {
        self.args
            .iter()
            .cloned()
            .chain(extra.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Build a `Command` for `<runtime> <extra...>`.
    pub fn command(&self, extra: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args_with(extra));
        cmd
    }

    /// Render `<runtime> <extra...>` for messages.
    pub fn display_with(&self, extra: &[&str]) -> String {
        let words: Vec<String> = std::iter::once(self.program.clone())
            .chain(self.args_with(extra))
            .collect();
        shell_words::join(words)
    }
}

impl fmt::Display for RuntimeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&[]))
    }
}

/// Why the runtime could not hand over a container's logs.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting on `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed ({status}): {}", .output.trim_end())]
    Exit {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

/// Outcome of asking the runtime for one container's logs.
pub type Retrieval = std::result::Result<String, RetrievalError>;
