//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "castle-chat";
const PROJECT_FILES: [&str; 2] = ["castle.toml", ".castle.toml"];
const ENV_PREFIX: &str = "CASTLE_";

/// Where a configuration layer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    Global(PathBuf),
    Environment,
    Defaults,
}

/// A configuration layer and whether it contributed values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatus {
    pub source: ConfigSource,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CASTLE_` environment variables (`CASTLE_CHAT__MODEL=...`)
    /// 2. Explicit config path (if provided; a missing file is an error)
    /// 3. Project root: `./castle.toml` or `./.castle.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/castle-chat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default directory for the log file
    pub fn default_log_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The configuration layers in priority order, for `--show-config`
    pub fn sources(config_path: Option<&PathBuf>) -> Vec<SourceStatus> {
        let mut sources = vec![SourceStatus {
            source: ConfigSource::Environment,
            found: std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)),
        }];

        if let Some(path) = config_path {
            sources.push(SourceStatus {
                found: path.exists(),
                source: ConfigSource::Explicit(path.clone()),
            });
        }

        match Self::project_config_path() {
            Some(path) => sources.push(SourceStatus {
                source: ConfigSource::Project(path),
                found: true,
            }),
            None => sources.push(SourceStatus {
                source: ConfigSource::Project(PathBuf::from(PROJECT_FILES[0])),
                found: false,
            }),
        }

        if let Some(path) = Self::global_config_path() {
            sources.push(SourceStatus {
                found: path.exists(),
                source: ConfigSource::Global(path),
            });
        }

        sources.push(SourceStatus {
            source: ConfigSource::Defaults,
            found: true,
        });

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point the global config dir into the jail so the user's own
    /// config never leaks into a test
    fn isolate_global(jail: &mut Jail) {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
    }

    fn load(path: Option<&PathBuf>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.chat.suggestions.is_empty());
        assert_eq!(config.layout.column_width, 40.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("castle-chat"));
    }

    #[test]
    fn test_load_without_files_yields_defaults() {
        Jail::expect_with(|jail| {
            isolate_global(jail);

            let config = load(None)?;
            assert_eq!(config.chat.model, "gpt-3.5-turbo");
            assert_eq!(config.client.base_url, "https://api.openai.com/v1");
            assert_eq!(config.layout.cells_per_unit, 2);
            Ok(())
        });
    }

    #[test]
    fn test_load_project_file_merges_over_defaults() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "castle.toml",
                r#"
[chat]
model = "llama3"

[layout]
cells_per_unit = 4
"#,
            )?;

            let config = load(None)?;
            assert_eq!(config.chat.model, "llama3");
            assert_eq!(config.layout.cells_per_unit, 4);
            assert_eq!(config.layout.column_width, 40.0);
            assert_eq!(config.client.base_url, "https://api.openai.com/v1");
            Ok(())
        });
    }

    #[test]
    fn test_load_priority_env_over_explicit_over_project() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "castle.toml",
                r#"
[chat]
model = "project-model"

[client]
base_url = "http://project.local/v1"
timeout_seconds = 5
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[chat]
model = "explicit-model"

[client]
base_url = "http://explicit.local/v1"
"#,
            )?;
            let explicit = jail.directory().join("explicit.toml");

            let config = load(Some(&explicit))?;
            assert_eq!(config.chat.model, "explicit-model");
            assert_eq!(config.client.base_url, "http://explicit.local/v1");
            assert_eq!(config.client.timeout_seconds, Some(5));

            jail.set_env("CASTLE_CHAT__MODEL", "env-model");
            let config = load(Some(&explicit))?;
            assert_eq!(config.chat.model, "env-model");
            assert_eq!(config.client.base_url, "http://explicit.local/v1");
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_project_beats_global() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            std::fs::create_dir_all(jail.directory().join("xdg/castle-chat"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/castle-chat/config.toml",
                r#"
[chat]
model = "global-model"

[layout]
input_height = 3
"#,
            )?;

            let config = load(None)?;
            assert_eq!(config.chat.model, "global-model");

            jail.create_file(".castle.toml", "[chat]\nmodel = \"project-model\"\n")?;
            let config = load(None)?;
            assert_eq!(config.chat.model, "project-model");
            assert_eq!(config.layout.input_height, 3);
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let missing = jail.directory().join("nonexistent/castle.toml");

            let err = ConfigLoader::load(Some(&missing)).unwrap_err();
            assert!(err.to_string().contains("config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_load_reports_type_errors() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("bad.toml", "[layout]\ncells_per_unit = \"wide\"\n")?;
            let bad = jail.directory().join("bad.toml");

            assert!(ConfigLoader::load(Some(&bad)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_sources_end_with_defaults() {
        let explicit = PathBuf::from("/nonexistent/castle.toml");
        let sources = ConfigLoader::sources(Some(&explicit));

        assert_eq!(sources[0].source, ConfigSource::Environment);
        assert_eq!(
            sources[1],
            SourceStatus {
                source: ConfigSource::Explicit(explicit),
                found: false,
            }
        );
        assert_eq!(
            sources.last().map(|s| &s.source),
            Some(&ConfigSource::Defaults)
        );
    }
}
