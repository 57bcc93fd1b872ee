pub mod notifier;

pub use notifier::{ConfigOverrides, NotifierConfig, load_config, load_config_with};
