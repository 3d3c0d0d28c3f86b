pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{ConfigError, Settings};
pub use frameworks::runtime::{run, run_with_config};
