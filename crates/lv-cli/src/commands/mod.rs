//! CLI subcommand implementations.

pub mod correlate;
pub mod notifications;
pub mod texts;
pub mod timeline;
pub mod util;
