mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, LOCAL_CONFIG_NAME};
pub use model::{Config, FixtureEntry};
