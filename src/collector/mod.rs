pub mod collect;
pub mod header;

pub use collect::{CollectSummary, collect_and_print, render_body};
pub use header::section_header;
