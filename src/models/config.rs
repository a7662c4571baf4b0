//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::pagination::PagerWindow;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Prefix of environment variables overriding list settings,
/// e.g. `LIST_QUERY__DEFAULT_PAGE_SIZE=25` or `LIST_QUERY__PAGER__LEFT_EDGE=1`.
pub const ENV_PREFIX: &str = "LIST_QUERY";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Paging defaults shared by list screens.
pub struct QueryConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
    #[serde(default)]
    pub pager: PagerWindow,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            pager: PagerWindow::default(),
        }
    }
}

impl QueryConfig {
    /// Layers built-in defaults, an optional YAML file and `LIST_QUERY__*`
    /// environment variables. A `.env` file is read first when present.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("default_page_size", defaults.default_page_size as u64)?
            .set_default("max_page_size", defaults.max_page_size as u64)?
            .set_default("pager.left_edge", defaults.pager.left_edge as u64)?
            .set_default("pager.left_current", defaults.pager.left_current as u64)?
            .set_default("pager.right_current", defaults.pager.right_current as u64)?
            .set_default("pager.right_edge", defaults.pager.right_edge as u64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<QueryConfig>()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::Message("page sizes must be at least 1".to_string()));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Message(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = QueryConfig::load(Some("does/not/exist/list_query")).unwrap();
        assert_eq!(config, QueryConfig::default());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_page_size: 25\npager:\n  left_edge: 1").unwrap();

        let config = QueryConfig::load(file.path().to_str()).unwrap();

        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, MAX_PAGE_SIZE);
        assert_eq!(config.pager.left_edge, 1);
        assert_eq!(config.pager.right_current, 4);
    }

    #[test]
    fn default_larger_than_max_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_page_size: 50\nmax_page_size: 20").unwrap();

        assert!(QueryConfig::load(file.path().to_str()).is_err());
    }
}
