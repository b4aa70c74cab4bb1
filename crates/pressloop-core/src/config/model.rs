use crate::config::consts;
use crate::error::PressloopError;
use crate::segment::Markers;
use serde::{Deserialize, Serialize};

/// pressloop.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub hooks: HooksConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<SubscriptionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HooksConfig {
    #[serde(default = "default_priority")]
    pub default_priority: i32,
    #[serde(default = "default_accepted_args")]
    pub default_accepted_args: usize,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            default_priority: consts::hooks::DEFAULT_PRIORITY,
            default_accepted_args: consts::hooks::DEFAULT_ACCEPTED_ARGS,
        }
    }
}

fn default_priority() -> i32 {
    consts::hooks::DEFAULT_PRIORITY
}

fn default_accepted_args() -> usize {
    consts::hooks::DEFAULT_ACCEPTED_ARGS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "default_more_label")]
    pub more_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            more_label: default_more_label(),
        }
    }
}

fn default_more_label() -> String {
    consts::render::MORE_LABEL.to_string()
}

/// A named callback bound to an event from configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionConfig {
    pub event: String,
    pub callback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_args: Option<usize>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PressloopError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read pressloop.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PressloopError::ConfigParseError(e.to_string()))?;

        Self::parse(&content)
    }

    /// Write pressloop.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PressloopError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(PressloopError::IoError)?;

        Ok(())
    }

    /// Reject values the runtime cannot work with
    pub fn validate(&self) -> crate::error::Result<()> {
        let markers = [
            ("markers.page_break", &self.markers.page_break),
            ("markers.more", &self.markers.more),
            ("markers.more_close", &self.markers.more_close),
            ("markers.no_teaser", &self.markers.no_teaser),
        ];
        for (field, value) in markers {
            if value.is_empty() {
                return Err(PressloopError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: "marker must not be empty".to_string(),
                });
            }
        }

        for (index, sub) in self.subscriptions.iter().enumerate() {
            if sub.event.trim().is_empty() {
                return Err(PressloopError::ConfigInvalidValue {
                    field: format!("subscriptions[{}].event", index),
                    reason: "event name must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
