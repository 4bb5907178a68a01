//! Publishing orchestrator.
//!
//! Ties the conversion engine, metadata resolver, and API client together:
//! convert a note, upload its local images (featured first), rewrite image
//! references to their remote URLs, and create the post. [`preview`] runs
//! the same pipeline without touching the network.

mod error;
mod publisher;
mod store;

pub use error::PublishError;
pub use publisher::{Preview, PublishOptions, PublishResult, Publisher, preview};
pub use store::{FsImageStore, ImageStore};
