mod config;
mod load_config;

pub use config::{get_default_config, Config};
pub use load_config::get_config_from_path;
