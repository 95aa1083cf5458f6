//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use zone_reactor::Effector;
use zone_rules::{Action, ActorContext, Rule, TriggerPhase};

/// One call made to the effector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Direct { actor: u64, command: String },
    Privileged { command: String },
    Message { actor: u64, message: String },
}

/// Effector that records every call, usable across threads.
#[derive(Debug, Default)]
pub struct RecordingEffector {
    calls: Mutex<Vec<Call>>,
}

impl RecordingEffector {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl Effector for RecordingEffector {
    fn direct(&self, actor: &ActorContext, command: &str) {
        self.calls.lock().unwrap().push(Call::Direct {
            actor: actor.id,
            command: command.to_string(),
        });
    }

    fn privileged(&self, command: &str) {
        self.calls.lock().unwrap().push(Call::Privileged {
            command: command.to_string(),
        });
    }

    fn send_message(&self, actor: &ActorContext, message: &str) {
        self.calls.lock().unwrap().push(Call::Message {
            actor: actor.id,
            message: message.to_string(),
        });
    }
}

/// The compound rule used throughout the scenarios.
pub fn compound_rule() -> Rule {
    Rule::new("compound")
        .with_denied_commands(["kit", "tp"])
        .with_action(Action::broadcast(TriggerPhase::Enter, "Hi {playerName}"))
        .with_action(Action::privileged(TriggerPhase::Enter, "give {playerId} scrap 50"))
        .with_action(Action::direct(TriggerPhase::Leave, "heli.calltome"))
}
