use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use super::types::RuntimeCommand;

/// Result of probing the runtime before collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Ready,
    /// The binary ran but `version` failed, usually a stopped daemon.
    Unresponsive(ExitStatus),
}

/// Run `<runtime> version` to check that the runtime can be reached.
///
/// Only a failure to start the binary at all is an error.
pub fn probe(runtime: &RuntimeCommand) -> Result<Availability> {
    let status = runtime
        .command(&["version"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("failed to invoke `{runtime}`, is it installed and on PATH?"))?;

    if status.success() {
        log::debug!("`{runtime}` is available");
        Ok(Availability::Ready)
    } else {
        Ok(Availability::Unresponsive(status))
    }
}
