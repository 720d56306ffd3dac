//! Where users are sent when they hit a bug or a missing feature.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static CURRENT: OnceLock<ReportConfig> = OnceLock::new();

/// Product name and contact points used in generated hints.
///
/// ```toml
/// product = "Quarry"
/// issues_url = "https://github.com/quarry-db/quarry/issues"
/// support_email = "support@quarry-db.dev"
/// ```
///
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub product: String,
    pub issues_url: String,
    pub support_email: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            product: "Quarry".to_string(),
            issues_url: "https://github.com/quarry-db/quarry/issues".to_string(),
            support_email: "support@quarry-db.dev".to_string(),
        }
    }
}

impl ReportConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&text)
    }

    /// Make this the process-wide config.
    ///
    /// Fails if a config was already installed or if any hint was generated
    /// before this call.
    pub fn install(self) -> Result<(), ConfigError> {
        CURRENT.set(self).map_err(|_| ConfigError::AlreadyInstalled)?;
        tracing::debug!(issues_url = %ReportConfig::current().issues_url, "report config installed");
        Ok(())
    }

    /// The installed config, or the default one.
    pub fn current() -> &'static ReportConfig {
        CURRENT.get_or_init(ReportConfig::default)
    }

    fn issues(&self) -> &str {
        self.issues_url.trim_end_matches('/')
    }

    /// Guidance attached to internal assertion failures.
    pub fn assertion_hint(&self) -> String {
        format!(
            "You have encountered an unexpected error inside {product}.\n\
             \n\
             Please search {issues} to see whether\n\
             this problem is already known. If it is not, please file a report\n\
             with as much detail as you can at:\n\
             \n    {issues}/new/choose\n\
             \n\
             If you would rather not post publicly, please contact us at:\n\
             \n    {support}\n\
             \n\
             The {product} team appreciates your feedback.\n",
            product = self.product,
            issues = self.issues(),
            support = self.support_email,
        )
    }

    /// Guidance attached to features that are not implemented and have no
    /// tracking issue.
    pub fn unimplemented_hint(&self) -> String {
        format!(
            "This feature is not yet implemented in {product}.\n\
             \n\
             Please search {issues} to see whether\n\
             this feature is already tracked. If it is not, please file a request\n\
             with the steps that led here at:\n\
             \n    {issues}/new/choose\n\
             \n\
             If you would rather not post publicly, please contact us at:\n\
             \n    {support}\n\
             \n\
             The {product} team appreciates your feedback.\n",
            product = self.product,
            issues = self.issues(),
            support = self.support_email,
        )
    }

    /// Pointer to a specific tracking issue.
    pub fn issue_hint(&self, issue: u32) -> String {
        format!("See: {}/{}", self.issues(), issue)
    }
}

/// Errors raised while loading or installing a [`ReportConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io(std::io::Error),
    /// The TOML was malformed or had unknown keys
    Parse(toml::de::Error),
    /// A config is already in effect
    AlreadyInstalled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read report config: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid report config: {}", err),
            ConfigError::AlreadyInstalled => write!(f, "report config is already installed"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::AlreadyInstalled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_issue_hint() {
        let config = ReportConfig::default();
        assert_eq!(
            config.issue_hint(12345),
            "See: https://github.com/quarry-db/quarry/issues/12345"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config =
            ReportConfig::from_toml_str(r#"issues_url = "https://tracker.example/issues/""#)
                .unwrap();
        assert_eq!(config.product, "Quarry");
        assert_eq!(config.issue_hint(7), "See: https://tracker.example/issues/7");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ReportConfig::from_toml_str("issue_url = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid report config"));
    }

    #[test]
    fn test_assertion_hint_mentions_contacts() {
        let config = ReportConfig {
            product: "Acme".to_string(),
            issues_url: "https://acme.example/bugs".to_string(),
            support_email: "help@acme.example".to_string(),
        };
        let hint = config.assertion_hint();
        assert!(hint.starts_with("You have encountered an unexpected error inside Acme.\n"));
        assert!(hint.contains("\n    https://acme.example/bugs/new/choose\n"));
        assert!(hint.contains("\n    help@acme.example\n"));
        assert!(hint.ends_with("The Acme team appreciates your feedback.\n"));
    }

    #[test]
    fn test_unimplemented_hint() {
        let hint = ReportConfig::default().unimplemented_hint();
        assert!(hint.starts_with("This feature is not yet implemented in Quarry."));
        assert!(hint.contains("https://github.com/quarry-db/quarry/issues/new/choose"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReportConfig::load("/nonexistent/quarry-report.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
