//! On-disk configuration and its conversion into a [`RuleTable`].
//!
//! The file keeps the original plugin's field names ("Safe Zones", "Monument Name",
//! "Commands To Run", ...) so existing JSON configs load unchanged. TOML with the
//! same keys is accepted too; the format is picked from the file extension.

mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rules::{
    Action, ActionKind, Rule, RuleTable, TriggerPhase, DEFAULT_BLOCKED_NOTICE, DEFAULT_WORLD_SIZE,
};

/// Version string written into freshly generated configs.
pub const CONFIG_VERSION: &str = "1.1.0";

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    #[serde(rename = "Version", default = "default_version")]
    pub version: String,

    #[serde(rename = "Safe Zones", default)]
    pub safe_zones: Vec<SafeZoneEntry>,

    #[serde(rename = "Messages", default)]
    pub messages: MessagesConfig,

    #[serde(rename = "Map", default)]
    pub map: MapConfig,
}

/// One safe-zone rule as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeZoneEntry {
    #[serde(rename = "Monument Name")]
    pub monument_name: String,

    #[serde(rename = "Blacklisted Commands", default)]
    pub blacklisted_commands: Vec<String>,

    #[serde(rename = "Use Random Action", default)]
    pub use_random_action: bool,

    #[serde(rename = "Commands To Run", default)]
    pub commands_to_run: Vec<CommandEntry>,

    #[serde(
        rename = "Enter Message",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub enter_message: Option<String>,

    #[serde(
        rename = "Leave Message",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub leave_message: Option<String>,
}

/// One action as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEntry {
    #[serde(rename = "Type")]
    pub kind: ActionKind,

    #[serde(rename = "Trigger")]
    pub trigger: TriggerPhase,

    #[serde(rename = "Command")]
    pub command: String,
}

/// Text sent to actors by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(rename = "Command Blocked", default = "default_blocked_notice")]
    pub command_blocked: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            command_blocked: default_blocked_notice(),
        }
    }
}

/// Map settings used for the `{grid}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(rename = "World Size", default = "default_world_size")]
    pub world_size: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
        }
    }
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_blocked_notice() -> String {
    DEFAULT_BLOCKED_NOTICE.to_string()
}

fn default_world_size() -> f32 {
    DEFAULT_WORLD_SIZE
}

impl Default for ZoneConfig {
    /// The stock configuration: a single Outpost ("compound") rule.
    fn default() -> Self {
        Self {
            version: default_version(),
            safe_zones: vec![SafeZoneEntry {
                monument_name: "compound".to_string(),
                blacklisted_commands: vec!["kit".to_string(), "tp".to_string()],
                use_random_action: false,
                commands_to_run: vec![
                    CommandEntry {
                        kind: ActionKind::Broadcast,
                        trigger: TriggerPhase::Enter,
                        command: "Hello! {playerName} here, currently at {monumentName} in grid {grid} to recycle some items.".to_string(),
                    },
                    CommandEntry {
                        kind: ActionKind::Direct,
                        trigger: TriggerPhase::Leave,
                        command: "heli.calltome".to_string(),
                    },
                    CommandEntry {
                        kind: ActionKind::Privileged,
                        trigger: TriggerPhase::Enter,
                        command: "inventory.giveto {playerId} scrap 50".to_string(),
                    },
                ],
                enter_message: Some("Welcome to {monumentName}, {playerName}!".to_string()),
                leave_message: Some(
                    "Goodbye, {playerName}. Hope you had a great time at {monumentName}!"
                        .to_string(),
                ),
            }],
            messages: MessagesConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl ZoneConfig {
    /// Parse a JSON config.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a TOML config.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as TOML.
    pub fn to_toml_pretty(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a config file, choosing the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&contents)?,
            ConfigFormat::Toml => Self::from_toml_str(&contents)?,
        };

        tracing::info!(
            path = %path.display(),
            safe_zones = config.safe_zones.len(),
            "loaded safe zone config"
        );
        Ok(config)
    }

    /// Read a config file, writing the stock config first if none exists.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        tracing::warn!(path = %path.display(), "config file missing, writing defaults");
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the config to disk in the format implied by the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => self.to_json_pretty()?,
            ConfigFormat::Toml => self.to_toml_pretty()?,
        };

        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate and convert into the immutable table the engine reads.
    pub fn to_rule_table(&self) -> Result<RuleTable, ConfigError> {
        let world_size = self.map.world_size;
        if !world_size.is_finite() || world_size <= 0.0 {
            return Err(ConfigError::InvalidWorldSize(world_size));
        }

        let rules = self
            .safe_zones
            .iter()
            .map(SafeZoneEntry::to_rule)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleTable::new(rules)
            .with_blocked_notice(self.messages.command_blocked.clone())
            .with_world_size(world_size))
    }
}

impl SafeZoneEntry {
    /// Convert one file entry into a [`Rule`].
    pub fn to_rule(&self) -> Result<Rule, ConfigError> {
        if self.monument_name.is_empty() {
            tracing::warn!("safe zone with an empty monument name will never match");
        }

        let mut rule = Rule::new(self.monument_name.clone())
            .with_denied_commands(&self.blacklisted_commands)
            .with_random_action(self.use_random_action);

        for (index, entry) in self.commands_to_run.iter().enumerate() {
            if entry.command.trim().is_empty() {
                return Err(ConfigError::EmptyCommand {
                    zone: self.monument_name.clone(),
                    index,
                });
            }
            rule = rule.with_action(Action::new(entry.kind, entry.trigger, entry.command.clone()));
        }

        rule.enter_message = self.enter_message.clone();
        rule.leave_message = self.leave_message.clone();
        Ok(rule)
    }
}
