// Core configuration types
mod core;
mod loader;
pub mod validation;

pub use self::core::{default_output, default_sources, AnalysisConfig, SourceConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use validation::validate_config;
