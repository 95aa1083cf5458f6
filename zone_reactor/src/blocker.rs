//! Command blocker - refuses denied commands inside matching zones.

use zone_rules::Rule;

/// The first rule that blocks `attempted_command` for an actor standing in
/// `overlapping_zones`, or `None` if the command is allowed.
///
/// Every overlapping zone is checked against every rule, zones outermost. The
/// command is compared lower-cased. Exempt actors are never blocked and no rule
/// is consulted for them.
pub fn find_blocking_rule<'r, 'z, Z>(
    attempted_command: &str,
    overlapping_zones: Z,
    rules: &'r [Rule],
    exempt: bool,
) -> Option<&'r Rule>
where
    Z: IntoIterator<Item = &'z str>,
{
    if exempt {
        return None;
    }

    let normalized = attempted_command.to_lowercase();
    overlapping_zones.into_iter().find_map(|zone| {
        rules
            .iter()
            .find(|rule| rule.matches_zone(zone) && rule.denies(&normalized))
    })
}

/// Whether `attempted_command` is blocked. See [`find_blocking_rule`].
pub fn is_blocked<'z, Z>(
    attempted_command: &str,
    overlapping_zones: Z,
    rules: &[Rule],
    exempt: bool,
) -> bool
where
    Z: IntoIterator<Item = &'z str>,
{
    find_blocking_rule(attempted_command, overlapping_zones, rules, exempt).is_some()
}
