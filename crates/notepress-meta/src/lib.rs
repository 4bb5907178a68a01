//! Publication metadata resolution.
//!
//! Given a parsed front-matter mapping and caller-supplied defaults, computes
//! the effective title, slug, tags, publication status, and scheduling
//! timestamp. Pure and deterministic: the resolution-time "now" is injected
//! by the caller, never read from an ambient clock.
//!
//! Malformed input never errors. An unparseable date is treated as absent,
//! an unrecognized status falls back to the configured default.

mod date;
mod resolver;
mod status;

pub use date::parse_date_value;
pub use resolver::{PostMetadata, resolve};
pub use status::{PastSchedulePolicy, PostStatus};
