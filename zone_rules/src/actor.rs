//! Actor state as seen by the rule engine.

use serde::{Deserialize, Serialize};

use crate::spatial::Position;

/// Permission that exempts an actor from command blocking.
pub const IGNORE_PERMISSION: &str = "safezonecommands.ignore";

/// Snapshot of the actor an event is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorContext {
    /// Stable platform identifier (rendered as a decimal string).
    pub id: u64,
    pub display_name: String,
    pub position: Position,
    pub is_admin: bool,
    pub is_npc: bool,
    pub is_hostile: bool,
    /// Whether the host currently reports the actor inside any safe zone.
    pub in_safe_zone: bool,
}

impl ActorContext {
    /// Create a regular player at the origin, outside any safe zone.
    pub fn new(id: u64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            position: Position::default(),
            is_admin: false,
            is_npc: false,
            is_hostile: false,
            in_safe_zone: false,
        }
    }

    /// Place the actor at a position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Mark the actor as inside (or outside) a safe zone.
    pub fn in_safe_zone(mut self, inside: bool) -> Self {
        self.in_safe_zone = inside;
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_npc(mut self, is_npc: bool) -> Self {
        self.is_npc = is_npc;
        self
    }

    pub fn with_hostile(mut self, is_hostile: bool) -> Self {
        self.is_hostile = is_hostile;
        self
    }

    /// Zone transitions are only processed for non-hostile human players.
    pub fn reacts_to_transitions(&self) -> bool {
        !self.is_npc && !self.is_hostile
    }
}
