//! Path matching and route dispatch.

pub mod files;
pub mod matcher;
pub mod router;

pub use files::ServedDir;
pub use matcher::{PathPattern, PatternError};
pub use router::Router;
