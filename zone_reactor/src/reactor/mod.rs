//! Zone reactor - runs host events through the rule pipeline.
//!
//! For a zone transition:
//! 1. **Filter**: NPCs and hostile actors are ignored
//! 2. **Match**: the zone identifier is resolved to a rule
//! 3. **Select**: the rule's actions for the phase are picked
//! 4. **Render & dispatch**: each action is rendered and handed to the effector
//! 5. **Message**: the rule's enter/leave message, if any, is sent to the actor
//!
//! For a command attempt the actor's overlapping monuments are checked against
//! every rule's denylist, and a blocked actor is told so.

mod handle;

pub use handle::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use zone_rules::{ActorContext, ConfigError, RuleTable, TriggerPhase, ZoneConfig, IGNORE_PERMISSION};

use crate::blocker::find_blocking_rule;
use crate::dispatcher::{dispatch, Effector};
use crate::events::ZoneEvent;
use crate::matcher::match_zone;
use crate::placeholder::{render, RenderContext};
use crate::selector::{select, RandomSource};

/// Answers permission queries for actors.
pub trait PermissionOracle {
    fn has_permission(&self, actor_id: u64, permission: &str) -> bool;
}

/// An oracle that grants nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPermissions;

impl PermissionOracle for NoPermissions {
    fn has_permission(&self, _actor_id: u64, _permission: &str) -> bool {
        false
    }
}

/// What handling an event amounted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// The actor is not subject to transition processing.
    Skipped,
    /// No rule applies to the zone.
    NoMatch,
    /// A rule matched; `actions` were dispatched and the message sent if configured.
    Triggered { actions: usize, message_sent: bool },
    /// The command may run.
    Allowed,
    /// The command was refused by the rule with this pattern.
    Blocked { zone_pattern: String },
}

impl EventOutcome {
    /// Whether the host should cancel the command.
    pub fn is_blocked(&self) -> bool {
        matches!(self, EventOutcome::Blocked { .. })
    }
}

/// The engine: one active rule table plus the random source for random rules.
///
/// Shareable across threads when `R: Send`. Each event runs to completion against
/// a single table snapshot.
#[derive(Debug)]
pub struct ZoneReactor<R = ChaCha8Rng> {
    table: RuleTableHandle,
    rng: Mutex<R>,
}

impl ZoneReactor<ChaCha8Rng> {
    /// Create a reactor with an entropy-seeded random source.
    pub fn new(table: RuleTable) -> Self {
        Self::with_rng(table, ChaCha8Rng::from_entropy())
    }

    /// Create a reactor whose random selections repeat for a given seed.
    pub fn seeded(table: RuleTable, seed: u64) -> Self {
        Self::with_rng(table, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a reactor from a parsed config.
    pub fn from_config(config: &ZoneConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.to_rule_table()?))
    }
}

impl<R: RandomSource> ZoneReactor<R> {
    /// Create a reactor with a caller-supplied random source.
    pub fn with_rng(table: RuleTable, rng: R) -> Self {
        tracing::info!(rules = table.len(), "rule table installed");
        Self {
            table: RuleTableHandle::new(table),
            rng: Mutex::new(rng),
        }
    }

    /// Snapshot of the active rule table.
    pub fn table(&self) -> Arc<RuleTable> {
        self.table.current()
    }

    /// Replace the active rule table. Events already running keep the old one.
    pub fn reload(&self, table: RuleTable) {
        let rules = table.len();
        self.table.replace(table);
        tracing::info!(rules, "rule table reloaded");
    }

    /// Load a config file and swap it in. On error the current table stays active.
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let table = ZoneConfig::load(path)?.to_rule_table()?;
        self.reload(table);
        Ok(())
    }

    /// Handle any event.
    pub fn handle(
        &self,
        event: &ZoneEvent,
        effector: &dyn Effector,
        permissions: &dyn PermissionOracle,
    ) -> EventOutcome {
        match event {
            ZoneEvent::Entered { actor, zone } => self.on_enter(actor, zone, effector),
            ZoneEvent::Left { actor, zone } => self.on_leave(actor, zone, effector),
            ZoneEvent::CommandAttempted {
                actor,
                command,
                zones,
            } => self.on_command(
                actor,
                command,
                zones.iter().map(String::as_str),
                effector,
                permissions,
            ),
        }
    }

    /// An actor entered the safe zone identified by `zone`.
    pub fn on_enter(&self, actor: &ActorContext, zone: &str, effector: &dyn Effector) -> EventOutcome {
        self.on_transition(actor, zone, TriggerPhase::Enter, effector)
    }

    /// An actor left the safe zone identified by `zone`.
    pub fn on_leave(&self, actor: &ActorContext, zone: &str, effector: &dyn Effector) -> EventOutcome {
        self.on_transition(actor, zone, TriggerPhase::Leave, effector)
    }

    /// An actor attempted `command` while standing in `zones`.
    pub fn on_command<'z>(
        &self,
        actor: &ActorContext,
        command: &str,
        zones: impl IntoIterator<Item = &'z str>,
        effector: &dyn Effector,
        permissions: &dyn PermissionOracle,
    ) -> EventOutcome {
        if !actor.in_safe_zone {
            return EventOutcome::Allowed;
        }

        let exempt = actor.is_admin || permissions.has_permission(actor.id, IGNORE_PERMISSION);
        let table = self.table.current();

        match find_blocking_rule(command, zones, table.rules(), exempt) {
            Some(rule) => {
                tracing::info!(
                    actor = actor.id,
                    command,
                    pattern = %rule.zone_pattern,
                    "command blocked in safe zone"
                );
                effector.send_message(actor, table.blocked_notice());
                EventOutcome::Blocked {
                    zone_pattern: rule.zone_pattern.clone(),
                }
            }
            None => EventOutcome::Allowed,
        }
    }

    fn on_transition(
        &self,
        actor: &ActorContext,
        zone: &str,
        phase: TriggerPhase,
        effector: &dyn Effector,
    ) -> EventOutcome {
        if !actor.reacts_to_transitions() {
            return EventOutcome::Skipped;
        }

        let table = self.table.current();
        let Some(rule) = match_zone(zone, table.rules()) else {
            return EventOutcome::NoMatch;
        };

        let selected = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            select(rule, phase, &mut *rng)
        };

        let ctx = RenderContext::new(actor, &rule.zone_pattern, table.world_size());
        for action in &selected {
            dispatch(action, &ctx, effector);
        }

        let message_sent = match rule.message_for(phase) {
            Some(template) => {
                effector.send_message(actor, &render(template, &ctx));
                true
            }
            None => false,
        };

        tracing::debug!(
            actor = actor.id,
            zone,
            %phase,
            actions = selected.len(),
            message_sent,
            "zone transition handled"
        );

        EventOutcome::Triggered {
            actions: selected.len(),
            message_sent,
        }
    }
}
