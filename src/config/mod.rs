mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BuildMode, Config, DiagnosticsConfig, PersistConfig, StoreSection};
