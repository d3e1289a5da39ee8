//! Domain types.

mod candidate;
mod config_map;

pub use candidate::Candidate;
pub use config_map::ConfigMap;
