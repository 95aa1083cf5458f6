//! Action selector - decides which of a rule's actions fire for a transition.

use rand::Rng;
use zone_rules::{Action, Rule, TriggerPhase};

/// Source of uniform random indices for random action selection.
pub trait RandomSource {
    /// A uniformly distributed index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Actions `rule` fires for `phase`, in execution order.
///
/// Without random selection this is every action of the phase, in configured order.
/// With random selection one index is drawn over the *whole* action list, and the
/// picked action fires only if it belongs to `phase`. A random rule can therefore
/// fire nothing on a given transition even though it has actions for it.
pub fn select<'a, S>(rule: &'a Rule, phase: TriggerPhase, rng: &mut S) -> Vec<&'a Action>
where
    S: RandomSource + ?Sized,
{
    if rule.use_random_action && !rule.actions.is_empty() {
        let index = rng.pick_index(rule.actions.len());
        let selected: Vec<_> = rule
            .actions
            .get(index)
            .filter(|action| action.fires_on(phase))
            .into_iter()
            .collect();

        tracing::debug!(
            pattern = %rule.zone_pattern,
            %phase,
            index,
            fired = !selected.is_empty(),
            "random action drawn"
        );
        return selected;
    }

    rule.actions
        .iter()
        .filter(|action| action.fires_on(phase))
        .collect()
}
