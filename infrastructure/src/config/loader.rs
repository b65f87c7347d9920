//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["gunghap.toml", ".gunghap.toml"];

/// Prefix of environment variable overrides (`GUNGHAP_IMAGE__ENABLED=false`)
const ENV_PREFIX: &str = "GUNGHAP_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GUNGHAP_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gunghap.toml` or `./.gunghap.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/gunghap/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
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
    ///
    /// Returns XDG_CONFIG_HOME/gunghap/config.toml if set,
    /// otherwise falls back to ~/.config/gunghap/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gunghap").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./gunghap.toml or ./.gunghap.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.scoring.proposal_threshold, 50);
        assert!(config.image.enabled);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("gunghap"));
    }

    // `load` reads the process environment; keep those tests inside a Jail.

    fn load_in_jail(path: Option<&Path>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path).map_err(|e| *e)
    }

    fn temp_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_file() {
        let file = temp_config(
            r#"
[scoring]
proposal_threshold = 65

[output]
trace = true
"#,
        );

        figment::Jail::expect_with(|_| {
            let config = load_in_jail(Some(file.path()))?;
            assert_eq!(config.scoring.proposal_threshold, 65);
            assert!(config.output.trace);
            // Untouched sections keep their defaults
            assert_eq!(config.providers.openai.image_model, "dall-e-3");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let file = temp_config("[scoring]\nproposal_threshold = \"high\"\n");

        figment::Jail::expect_with(|_| {
            assert!(ConfigLoader::load(Some(file.path())).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("gunghap.toml", "[scoring]\nproposal_threshold = 60\n")?;
            jail.create_file("explicit.toml", "[scoring]\nproposal_threshold = 65\n")?;

            let config = load_in_jail(None)?;
            assert_eq!(config.scoring.proposal_threshold, 60);

            let config = load_in_jail(Some(Path::new("explicit.toml")))?;
            assert_eq!(config.scoring.proposal_threshold, 65);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_every_file() {
        let file = temp_config("[scoring]\nproposal_threshold = 65\n\n[image]\nenabled = true\n");

        figment::Jail::expect_with(|jail| {
            jail.create_file("gunghap.toml", "[scoring]\nproposal_threshold = 60\n")?;
            jail.set_env("GUNGHAP_SCORING__PROPOSAL_THRESHOLD", 71);
            jail.set_env("GUNGHAP_IMAGE__ENABLED", false);

            let config = load_in_jail(Some(file.path()))?;
            assert_eq!(config.scoring.proposal_threshold, 71);
            assert!(!config.image.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_env_reaches_nested_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GUNGHAP_PROVIDERS__OPENAI__IMAGE_MODEL", "dall-e-2");
            jail.set_env("GUNGHAP_OUTPUT__FORMAT", "json");

            let config = load_in_jail(None)?;
            assert_eq!(config.providers.openai.image_model, "dall-e-2");
            assert_eq!(config.output.format, Some(gunghap_domain::OutputFormat::Json));
            Ok(())
        });
    }
}
