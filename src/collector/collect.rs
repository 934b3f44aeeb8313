use std::io::{self, Write};

use super::header::section_header;
use crate::runtime::{LogSource, Retrieval};

/// What happened during one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    pub sections: usize,
    pub failures: usize,
}

/// Render what follows a section header: the captured text, then a blank line.
///
/// A failed retrieval is rendered as its error message in place of the logs.
pub fn render_body(retrieval: &Retrieval) -> String {
    let body = match retrieval {
        Ok(text) => text.clone(),
        Err(err) => err.to_string(),
    };
    format!("{body}\n\n")
}

/// Dump the logs of each container in order.
///
/// The header is flushed before the runtime is asked for logs, so a hung
/// retrieval still shows which container it is stuck on. Retrieval failures
/// are printed inline and never stop the run; only a failure to write `out`
/// does.
pub fn collect_and_print<S, W>(
    containers: &[String],
    source: &mut S,
    out: &mut W,
) -> io::Result<CollectSummary>
where
    S: LogSource + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = CollectSummary::default();

    for container in containers {
        writeln!(out, "{}", section_header(container))?;
        out.flush()?;

        let retrieval = source.fetch(container);
        if let Err(err) = &retrieval {
            log::warn!("could not fetch logs for {container}: {err}");
            summary.failures += 1;
        }

        out.write_all(render_body(&retrieval).as_bytes())?;
        out.flush()?;
        summary.sections += 1;
    }

    Ok(summary)
}
