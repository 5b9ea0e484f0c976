//! Changelog configuration and default merging.
//!
//! Projects may ship a partial config; defaults fill in only the fields that
//! are absent, and an explicitly configured field is never overwritten.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Label names that map onto the three named changelog sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub security: String,
    pub features: String,
    pub bugfixes: String,
}

/// Fully resolved changelog configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    pub sections: Sections,
    /// Labels that unconditionally drop a PR from every section.
    pub ignored_labels: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            sections: Sections {
                security: "security".to_string(),
                features: "features".to_string(),
                bugfixes: "bugfixes".to_string(),
            },
            ignored_labels: vec!["release".to_string()],
        }
    }
}

/// The on-disk shape of `release.yml`: everything optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialConfig {
    pub changelog: Option<PartialChangelog>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialChangelog {
    pub sections: Option<PartialSections>,
    #[serde(rename = "ignoredLabels")]
    pub ignored_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSections {
    pub security: Option<String>,
    pub features: Option<String>,
    pub bugfixes: Option<String>,
}

impl ChangelogConfig {
    /// Merge a partial config into the defaults, field by field.
    pub fn from_partial(partial: PartialConfig) -> Self {
        let mut config = Self::default();
        let Some(changelog) = partial.changelog else {
            return config;
        };

        if let Some(sections) = changelog.sections {
            if let Some(security) = sections.security {
                config.sections.security = security;
            }
            if let Some(features) = sections.features {
                config.sections.features = features;
            }
            if let Some(bugfixes) = sections.bugfixes {
                config.sections.bugfixes = bugfixes;
            }
        }
        if let Some(ignored) = changelog.ignored_labels {
            config.ignored_labels = ignored;
        }

        config
    }
}

/// Loads the project's changelog config; supplies defaults when the config is
/// absent or partially specified.
#[async_trait]
pub trait ConfigSource: Sync {
    async fn load(&self) -> Result<ChangelogConfig, SourceError>;
}
