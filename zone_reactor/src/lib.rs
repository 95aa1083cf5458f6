//! # Zone Reactor
//!
//! Reacts to actors entering or leaving monument safe zones and to commands they
//! attempt while inside one. Rules come from a [`zone_rules::RuleTable`]; this
//! crate decides what those rules do for a given event.
//!
//! ## Pipeline
//!
//! - **matcher**: resolves a zone identifier to the first rule whose pattern it contains
//! - **selector**: picks the actions a rule fires for a transition (all, or one at random)
//! - **placeholder**: renders `{playerName}`-style tokens against the actor
//! - **dispatcher**: hands rendered actions to the host through an [`Effector`]
//! - **blocker**: decides whether an attempted command is refused
//! - **reactor**: wires an event through the above against the current rule table
//!
//! The host owns event delivery, permissions and the actual command execution; it
//! plugs in through [`Effector`] and [`PermissionOracle`].

pub mod blocker;
pub mod dispatcher;
pub mod events;
pub mod matcher;
pub mod placeholder;
pub mod reactor;
pub mod selector;

pub use blocker::*;
pub use dispatcher::*;
pub use events::*;
pub use matcher::*;
pub use placeholder::*;
pub use reactor::*;
pub use selector::*;
