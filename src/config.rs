//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive runtime
//! behavior, helpers to load configuration from disk, and the persisted
//! last-directory record.

mod last_dir;
mod load;
mod schema;

pub use last_dir::LastDir;
pub use load::{config_dir, home_dir};
pub use schema::*;
