//! Music library: track records, catalog building and tag lookup.

mod model;
pub mod scan;
pub mod tags;

pub use model::{Catalog, Track};
pub use scan::{SUPPORTED_EXTENSIONS, build};
pub use tags::TagReader;
