//! Rule definitions - the in-memory form of a loaded configuration.
//!
//! A [`RuleTable`] is built once per load and never mutated afterwards. Reloading
//! produces a new table that replaces the old one wholesale.

mod action;

pub use action::*;

use std::collections::HashSet;

/// Notice sent to an actor whose command was blocked, unless configured otherwise.
pub const DEFAULT_BLOCKED_NOTICE: &str = "You cannot use this command in the safe zone.";

/// Map size used for grid labels, unless configured otherwise.
pub const DEFAULT_WORLD_SIZE: f32 = 4000.0;

/// The configuration entry governing one monument-name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Substring matched against runtime zone identifiers.
    pub zone_pattern: String,
    /// Lower-cased command names refused while inside the zone.
    pub denied_commands: HashSet<String>,
    /// Pick one random action per transition instead of all matching ones.
    pub use_random_action: bool,
    pub actions: Vec<Action>,
    pub enter_message: Option<String>,
    pub leave_message: Option<String>,
}

impl Rule {
    /// Create a rule for the given zone pattern with no actions or denials.
    pub fn new(zone_pattern: impl Into<String>) -> Self {
        Self {
            zone_pattern: zone_pattern.into(),
            denied_commands: HashSet::new(),
            use_random_action: false,
            actions: Vec::new(),
            enter_message: None,
            leave_message: None,
        }
    }

    /// Deny a command inside the zone. Stored lower-cased.
    pub fn with_denied_command(mut self, command: impl AsRef<str>) -> Self {
        self.denied_commands
            .insert(command.as_ref().trim().to_lowercase());
        self
    }

    /// Deny several commands inside the zone.
    pub fn with_denied_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for command in commands {
            self = self.with_denied_command(command);
        }
        self
    }

    /// Append an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Set the random selection policy.
    pub fn with_random_action(mut self, use_random_action: bool) -> Self {
        self.use_random_action = use_random_action;
        self
    }

    /// Set the enter message template.
    pub fn with_enter_message(mut self, template: impl Into<String>) -> Self {
        self.enter_message = Some(template.into());
        self
    }

    /// Set the leave message template.
    pub fn with_leave_message(mut self, template: impl Into<String>) -> Self {
        self.leave_message = Some(template.into());
        self
    }

    /// Check if this rule applies to a zone identifier.
    ///
    /// Case-sensitive substring containment. An empty pattern never matches.
    pub fn matches_zone(&self, zone_identifier: &str) -> bool {
        !self.zone_pattern.is_empty() && zone_identifier.contains(self.zone_pattern.as_str())
    }

    /// Check if an already lower-cased command is denied by this rule.
    pub fn denies(&self, normalized_command: &str) -> bool {
        self.denied_commands.contains(normalized_command)
    }

    /// Message template for a transition, if one is configured and non-empty.
    pub fn message_for(&self, phase: TriggerPhase) -> Option<&str> {
        let message = match phase {
            TriggerPhase::Enter => self.enter_message.as_deref(),
            TriggerPhase::Leave => self.leave_message.as_deref(),
        };
        message.filter(|m| !m.is_empty())
    }
}

/// The immutable set of rules plus the table-wide settings they are rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    blocked_notice: String,
    world_size: f32,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RuleTable {
    /// Create a table from rules in match-priority order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            blocked_notice: DEFAULT_BLOCKED_NOTICE.to_string(),
            world_size: DEFAULT_WORLD_SIZE,
        }
    }

    /// Set the notice sent when a command is blocked.
    pub fn with_blocked_notice(mut self, notice: impl Into<String>) -> Self {
        self.blocked_notice = notice.into();
        self
    }

    /// Set the map size used for grid labels.
    pub fn with_world_size(mut self, world_size: f32) -> Self {
        self.world_size = world_size;
        self
    }

    /// Rules in configured order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn blocked_notice(&self) -> &str {
        &self.blocked_notice
    }

    pub fn world_size(&self) -> f32 {
        self.world_size
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
