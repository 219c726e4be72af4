use anyhow::{Context, Result};
use export::{ExportFormat, ExportOptions, PageSize};
use layout::LayoutId;
use resume::SectionKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wizard::{DEFAULT_STEPS, LocationPolicy, StepSequencer};

use crate::paths;

// ============================================================================
// Main Config Schema
// ============================================================================

/// The vitae configuration file (`config.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VitaeConfig {
    /// Live preview settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Location auto-detection
    #[serde(default)]
    pub location: LocationConfig,

    /// Document export
    #[serde(default)]
    pub export: ExportConfig,

    /// Wizard step order
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl VitaeConfig {
    /// Load the config from `path`, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let default = paths::config_file()?;
                if !default.exists() {
                    log::debug!("No config at {}; using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read config file: {}", config_path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML format in vitae config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.location.validate()?;
        self.export.validate()?;
        self.wizard.validate()?;
        Ok(())
    }
}

// ============================================================================
// Preview
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreviewConfig {
    /// Initial preview layout
    #[serde(default)]
    pub layout: LayoutId,
}

// ============================================================================
// Location
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    /// Look up the location when the wizard starts
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Geolocation endpoint (ipapi.co compatible)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How a detected location is applied
    #[serde(default)]
    pub policy: LocationPolicy,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            policy: LocationPolicy::default(),
        }
    }
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("location.timeout_secs must be at least 1");
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            anyhow::bail!(
                "location.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            );
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    locate::backend::ipapi::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    locate::backend::ipapi::DEFAULT_TIMEOUT.as_secs()
}

// ============================================================================
// Export
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Document format
    #[serde(default)]
    pub format: ExportFormat,

    /// Output directory (supports ~ and $VARS)
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name without extension
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Page size for PDF and HTML exports
    #[serde(default)]
    pub page: PageSize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            page: PageSize::default(),
        }
    }
}

impl ExportConfig {
    /// Get the expanded output directory
    pub fn expanded_output_dir(&self) -> PathBuf {
        paths::expand(&self.output_dir)
    }

    /// Exporter options, with an optional directory override
    pub fn options(&self, output_dir: Option<&Path>) -> ExportOptions {
        let dir = output_dir.map_or_else(|| self.expanded_output_dir(), Path::to_path_buf);
        ExportOptions::new(dir)
            .file_name(self.file_name.clone())
            .page(self.page)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            anyhow::bail!("export.output_dir cannot be empty");
        }
        ExportOptions::default()
            .file_name(self.file_name.clone())
            .target(self.format)
            .context("export.file_name is not a valid file name")?;
        Ok(())
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_file_name() -> String {
    "resume".to_string()
}

// ============================================================================
// Wizard
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Steps in the order they are shown
    #[serde(default = "default_steps")]
    pub steps: Vec<SectionKey>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

impl WizardConfig {
    /// Build the step cursor
    pub fn sequencer(&self) -> Result<StepSequencer<SectionKey>> {
        StepSequencer::new(self.steps.clone()).context("Invalid wizard.steps")
    }

    pub fn validate(&self) -> Result<()> {
        self.sequencer().map(|_| ())
    }
}

fn default_steps() -> Vec<SectionKey> {
    DEFAULT_STEPS.to_vec()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        let config = VitaeConfig::parse("").unwrap();
        assert_eq!(config, VitaeConfig::default());
        assert_eq!(config.preview.layout, LayoutId::Simple);
        assert!(config.location.enabled);
        assert_eq!(config.location.endpoint, "https://ipapi.co/json/");
        assert_eq!(config.location.policy, LocationPolicy::FillIfUntouched);
        assert_eq!(config.export.format, ExportFormat::Pdf);
        assert_eq!(config.wizard.steps, DEFAULT_STEPS.to_vec());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[preview]
layout = "two-column"

[location]
enabled = false
endpoint = "http://localhost:8080/json/"
timeout_secs = 2
policy = "overwrite"

[export]
format = "text"
output_dir = "~/cv"
file_name = "jane-doe"
page = "letter"

[wizard]
steps = ["personal-info", "experience", "skills"]
"#;
        let config = VitaeConfig::parse(toml).unwrap();

        assert_eq!(config.preview.layout, LayoutId::TwoColumn);
        assert!(!config.location.enabled);
        assert_eq!(config.location.timeout(), Duration::from_secs(2));
        assert_eq!(config.location.policy, LocationPolicy::Overwrite);
        assert_eq!(config.export.format, ExportFormat::Text);
        assert_eq!(config.export.page, PageSize::Letter);
        assert_eq!(
            config.export.expanded_output_dir(),
            dirs::home_dir().unwrap().join("cv")
        );
        assert_eq!(
            config.wizard.steps,
            vec![
                SectionKey::PersonalInfo,
                SectionKey::Experience,
                SectionKey::Skills
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_steps() {
        assert!(VitaeConfig::parse("[wizard]\nsteps = []").is_err());
        assert!(VitaeConfig::parse("[wizard]\nsteps = [\"skills\", \"skills\"]").is_err());
        assert!(VitaeConfig::parse("[wizard]\nsteps = [\"hobbies\"]").is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(VitaeConfig::parse("[location]\ntimeout_secs = 0").is_err());
        assert!(VitaeConfig::parse("[location]\nendpoint = \"ftp://x\"").is_err());
        assert!(VitaeConfig::parse("[export]\nfile_name = \"a/b\"").is_err());
        assert!(VitaeConfig::parse("[export]\npage = \"b5\"").is_err());
        assert!(VitaeConfig::parse("[preview]\nlayout = \"fancy\"").is_err());
        assert!(VitaeConfig::parse("[preview]\ncolor = \"red\"").is_err());
    }

    #[test]
    fn test_export_options_override() {
        let config = ExportConfig {
            file_name: "cv".to_string(),
            ..ExportConfig::default()
        };
        let options = config.options(Some(Path::new("/tmp/out")));
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(options.file_name, "cv");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vitae.toml");
        std::fs::write(&path, "[preview]\nlayout = \"comprehensive\"\n").unwrap();

        let config = VitaeConfig::load(Some(&path)).unwrap();
        assert_eq!(config.preview.layout, LayoutId::Comprehensive);

        assert!(VitaeConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = VitaeConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert_eq!(VitaeConfig::parse(&toml).unwrap(), config);
    }
}
