//! Command dispatcher - executes rendered actions through the host.

use zone_rules::{Action, ActionKind, ActorContext};

use crate::placeholder::{render, RenderContext};

/// The host capability that actually runs directives and delivers messages.
///
/// Calls are fire-and-forget. Failures (actor disconnected, command rejected) are
/// the effector's business; nothing is retried.
pub trait Effector {
    /// Run `command` as if typed by the actor.
    fn direct(&self, actor: &ActorContext, command: &str);

    /// Run `command` with server authority.
    fn privileged(&self, command: &str);

    /// Send a chat message visible only to the actor.
    fn send_message(&self, actor: &ActorContext, message: &str);

    /// Say `text` in public chat as the actor.
    fn broadcast(&self, actor: &ActorContext, text: &str) {
        self.direct(actor, &chat_say(text));
    }
}

/// The console command that makes a player say `text` in global chat.
pub fn chat_say(text: &str) -> String {
    format!("chat.say \"{}\"", text)
}

/// Render `action` against `ctx` and hand it to `effector` according to its kind.
pub fn dispatch<E>(action: &Action, ctx: &RenderContext<'_>, effector: &E)
where
    E: Effector + ?Sized,
{
    let rendered = render(&action.template, ctx);
    let actor = ctx.actor();

    tracing::debug!(
        actor = actor.id,
        kind = ?action.kind,
        phase = %action.phase,
        command = %rendered,
        "dispatching action"
    );

    match action.kind {
        ActionKind::Broadcast => effector.broadcast(actor, &rendered),
        ActionKind::Direct => effector.direct(actor, &rendered),
        ActionKind::Privileged => effector.privileged(&rendered),
    }
}
