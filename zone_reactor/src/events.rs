//! Events delivered by the host.

use serde::{Deserialize, Serialize};
use zone_rules::{ActorContext, TriggerPhase};

/// Something that happened to an actor around a safe zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoneEvent {
    /// The actor stepped into a safe-zone trigger.
    Entered { actor: ActorContext, zone: String },

    /// The actor stepped out of a safe-zone trigger.
    Left { actor: ActorContext, zone: String },

    /// The actor ran a chat command. `zones` are the monuments whose bounds
    /// contain the actor's position.
    CommandAttempted {
        actor: ActorContext,
        command: String,
        zones: Vec<String>,
    },
}

impl ZoneEvent {
    /// The actor the event is about.
    pub fn actor(&self) -> &ActorContext {
        match self {
            ZoneEvent::Entered { actor, .. }
            | ZoneEvent::Left { actor, .. }
            | ZoneEvent::CommandAttempted { actor, .. } => actor,
        }
    }

    /// The transition phase, for enter/leave events.
    pub fn phase(&self) -> Option<TriggerPhase> {
        match self {
            ZoneEvent::Entered { .. } => Some(TriggerPhase::Enter),
            ZoneEvent::Left { .. } => Some(TriggerPhase::Leave),
            ZoneEvent::CommandAttempted { .. } => None,
        }
    }
}
