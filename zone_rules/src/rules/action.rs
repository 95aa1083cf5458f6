//! Action definitions.

use serde::{Deserialize, Serialize};

/// How a rendered action is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Said in public chat by the actor.
    #[serde(alias = "Chat")]
    Broadcast,
    /// Run as a raw command on behalf of the actor.
    #[serde(alias = "Client")]
    Direct,
    /// Run with server authority, not attributed to the actor.
    #[serde(alias = "Server")]
    Privileged,
}

/// Which zone transition fires an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerPhase {
    Enter,
    Leave,
}

impl std::fmt::Display for TriggerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerPhase::Enter => write!(f, "enter"),
            TriggerPhase::Leave => write!(f, "leave"),
        }
    }
}

/// One configured directive attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub phase: TriggerPhase,
    /// Raw text, may contain placeholder tokens.
    pub template: String,
}

impl Action {
    /// Create a new action.
    pub fn new(kind: ActionKind, phase: TriggerPhase, template: impl Into<String>) -> Self {
        Self {
            kind,
            phase,
            template: template.into(),
        }
    }

    /// Shorthand for a public chat line on enter/leave.
    pub fn broadcast(phase: TriggerPhase, template: impl Into<String>) -> Self {
        Self::new(ActionKind::Broadcast, phase, template)
    }

    /// Shorthand for an actor-scoped raw command.
    pub fn direct(phase: TriggerPhase, template: impl Into<String>) -> Self {
        Self::new(ActionKind::Direct, phase, template)
    }

    /// Shorthand for a server command.
    pub fn privileged(phase: TriggerPhase, template: impl Into<String>) -> Self {
        Self::new(ActionKind::Privileged, phase, template)
    }

    /// Check whether this action fires on the given transition.
    pub fn fires_on(&self, phase: TriggerPhase) -> bool {
        self.phase == phase
    }
}
