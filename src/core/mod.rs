pub mod config;
pub mod error;
pub mod types;

pub use config::QuarryConfig;
pub use types::{NetworkId, SurfaceClass};
