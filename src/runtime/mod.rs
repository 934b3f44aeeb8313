// Container runtime access: command parsing, availability probe, log retrieval.

pub mod engine;
pub mod fetch;
pub mod types;

pub use engine::{Availability, probe};
pub use fetch::{CliLogSource, LogSource};
pub use types::{Retrieval, RetrievalError, RuntimeCommand};
