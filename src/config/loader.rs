//! ConfigLoader: layers config sources and deserializes `NotesConfig`.

use super::{paths, NotesConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Environment prefix; `SHADOW__DISPLAY__PREVIEW_LENGTH=50` sets `display.preview_length`
pub const ENV_PREFIX: &str = "SHADOW";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// Precedence (lowest to highest): defaults, the global config file (or
    /// `explicit_file` in its place), environment.
    pub fn load(explicit_file: Option<&Path>) -> Result<NotesConfig, ConfigError> {
        let builder = Config::builder();
        let builder = match explicit_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match paths::global_config_file() {
                Some(global) => builder.add_source(File::from(global).required(false)),
                None => builder,
            },
        };
        let config = Self::with_environment(builder).build()?;
        let loaded: NotesConfig = config.try_deserialize()?;
        tracing::debug!(?explicit_file, "configuration loaded");
        Ok(loaded)
    }

    fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }
}
