//! Configuration file loader with multi-source merging

use super::file_config::{FileConfig, FileSourceConfig};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "quotebox";
const PROJECT_FILES: [&str; 2] = ["quotebox.toml", ".quotebox.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quotebox.toml` or `./.quotebox.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quotebox/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::load_from(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
    }

    /// Merge the given files over the defaults, lowest priority first
    ///
    /// `[source]` is not merged key by key: the highest layer that sets
    /// either `path` or `url` supplies the whole section.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        let mut source = FileSourceConfig::default();

        for path in [global, project, explicit].into_iter().flatten() {
            let layer: SourceLayer = Figment::from(Toml::file(path))
                .extract()
                .map_err(Box::new)?;
            if layer.source.path.is_some() || layer.source.url.is_some() {
                source = layer.source;
            }
            figment = figment.merge(Toml::file(path));
        }

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        config.source = source;
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quotebox/config.toml if set,
    /// otherwise the platform config directory
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

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quotebox.toml or ./.quotebox.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

/// The `[source]` section of a single config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SourceLayer {
    source: FileSourceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebox_domain::Theme;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.source.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("quotebox"));
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("quotebox.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[output]\ntheme = \"crt\"\ncolor = false\n").unwrap();
        fs::write(&explicit, "[output]\ntheme = \"plain\"\n").unwrap();

        let config = ConfigLoader::load_from(None, Some(project.as_path()), Some(explicit.as_path())).unwrap();

        assert_eq!(config.output.theme, Theme::Plain);
        // Keys the explicit file leaves out keep the project value
        assert!(!config.output.color);
    }

    #[test]
    fn test_project_url_replaces_global_path() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let project = dir.path().join("quotebox.toml");
        fs::write(&global, "[source]\npath = \"edicts.txt\"\n").unwrap();
        fs::write(&project, "[source]\nurl = \"https://example.com/q.txt\"\n").unwrap();

        let config = ConfigLoader::load_from(Some(global.as_path()), Some(project.as_path()), None).unwrap();

        assert!(config.source.path.is_none());
        assert_eq!(config.source.url.as_deref(), Some("https://example.com/q.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_path_replaces_project_url() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("quotebox.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[source]\nurl = \"https://example.com/q.txt\"\n").unwrap();
        fs::write(&explicit, "[source]\npath = \"local.txt\"\n").unwrap();

        let config = ConfigLoader::load_from(None, Some(project.as_path()), Some(explicit.as_path())).unwrap();

        assert_eq!(config.source.path, Some(PathBuf::from("local.txt")));
        assert!(config.source.url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layer_without_source_keeps_lower_source() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let project = dir.path().join("quotebox.toml");
        fs::write(&global, "[source]\npath = \"edicts.txt\"\n").unwrap();
        fs::write(&project, "[output]\ntheme = \"crt\"\n").unwrap();

        let config = ConfigLoader::load_from(Some(global.as_path()), Some(project.as_path()), None).unwrap();

        assert_eq!(config.source.path, Some(PathBuf::from("edicts.txt")));
        assert_eq!(config.output.theme, Theme::Crt);
    }

    #[test]
    fn test_both_keys_in_one_file_still_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("quotebox.toml");
        fs::write(
            &project,
            "[source]\npath = \"a.txt\"\nurl = \"https://example.com/q.txt\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(None, Some(project.as_path()), None).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[repl]\nreveal_delay_ms = \"soon\"\n").unwrap();

        assert!(ConfigLoader::load_from(None, None, Some(bad.as_path())).is_err());
    }
}
