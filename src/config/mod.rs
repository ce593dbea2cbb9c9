mod filesystem;
mod loader;
mod merge;
mod model;
pub mod presets;
mod validation;

pub use filesystem::{APP_NAME, FileSystem, RealFileSystem};
pub use loader::{
    ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, USER_CONFIG_NAME, resolve_value,
};
pub use merge::merge_toml_values;
pub use model::{
    CONFIG_VERSION, ChartConfig, Config, DEFAULT_TEXT_BAR_WIDTH, MAX_TEXT_BAR_WIDTH,
};
pub use validation::{MAX_HORIZON_YEARS, MAX_REVEAL_MS, validate_config_semantics};
