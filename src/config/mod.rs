//! Configuration for episodic.
//!
//! An optional YAML file controls prompt expansion, seeding and logging.
//! Parsing is forward-compatible (unknown fields are ignored), every field
//! has a default, and values are validated after loading.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::ExpansionMode;
