//! # Zone Rules
//!
//! Data side of safe-zone commands: the rule table consulted when actors enter or
//! leave a monument's safe zone, the actor and map geometry types events carry, and
//! the configuration file that produces a rule table.
//! This crate holds no event-handling logic; see `zone_reactor` for that.

pub mod actor;
pub mod config;
pub mod rules;
pub mod spatial;

pub use actor::*;
pub use config::*;
pub use rules::*;
pub use spatial::*;
