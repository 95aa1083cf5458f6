//! Placeholder engine - renders `{token}` templates against an actor.
//!
//! Rendering is a single left-to-right pass: each recognized token is replaced by
//! its value and scanning resumes after the token, so a value is never re-read as
//! template text. A player named `{playerId}` stays `{playerId}` in the output.

mod nice_name;

pub use nice_name::*;

use zone_rules::{grid_label, ActorContext, Position};

/// Tokens recognized in action and message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    PlayerId,
    PlayerName,
    PositionX,
    PositionY,
    PositionZ,
    Grid,
    MonumentName,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::PlayerId,
        Placeholder::PlayerName,
        Placeholder::PositionX,
        Placeholder::PositionY,
        Placeholder::PositionZ,
        Placeholder::Grid,
        Placeholder::MonumentName,
    ];

    /// The literal spelling in templates, braces included.
    pub fn literal(&self) -> &'static str {
        match self {
            Placeholder::PlayerId => "{playerId}",
            Placeholder::PlayerName => "{playerName}",
            Placeholder::PositionX => "{positionX}",
            Placeholder::PositionY => "{positionY}",
            Placeholder::PositionZ => "{positionZ}",
            Placeholder::Grid => "{grid}",
            Placeholder::MonumentName => "{monumentName}",
        }
    }

    /// The token `text` starts with, if any.
    pub fn at_start(text: &str) -> Option<Placeholder> {
        Self::ALL
            .into_iter()
            .find(|token| text.starts_with(token.literal()))
    }
}

/// Everything a template can refer to, built once per event.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    actor: &'a ActorContext,
    zone_name: &'a str,
    zone_display_name: String,
    grid: String,
}

impl<'a> RenderContext<'a> {
    /// Build a context for `actor` in the zone named `zone_name`.
    pub fn new(actor: &'a ActorContext, zone_name: &'a str, world_size: f32) -> Self {
        Self {
            actor,
            zone_name,
            zone_display_name: nice_name(zone_name),
            grid: grid_label(actor.position, world_size),
        }
    }

    pub fn actor(&self) -> &'a ActorContext {
        self.actor
    }

    pub fn zone_name(&self) -> &'a str {
        self.zone_name
    }

    pub fn zone_display_name(&self) -> &str {
        &self.zone_display_name
    }

    pub fn grid(&self) -> &str {
        &self.grid
    }

    fn position(&self) -> Position {
        self.actor.position
    }

    fn push_value(&self, token: Placeholder, out: &mut String) {
        match token {
            Placeholder::PlayerId => out.push_str(&self.actor.id.to_string()),
            Placeholder::PlayerName => out.push_str(&self.actor.display_name),
            Placeholder::PositionX => out.push_str(&self.position().x.to_string()),
            Placeholder::PositionY => out.push_str(&self.position().y.to_string()),
            Placeholder::PositionZ => out.push_str(&self.position().z.to_string()),
            Placeholder::Grid => out.push_str(&self.grid),
            Placeholder::MonumentName => out.push_str(&self.zone_display_name),
        }
    }
}

/// Replace every recognized token in `template`. Anything else, including unknown
/// `{tokens}` and stray braces, is copied through unchanged.
pub fn render(template: &str, ctx: &RenderContext<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match Placeholder::at_start(candidate) {
            Some(token) => {
                ctx.push_value(token, &mut out);
                rest = &candidate[token.literal().len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
