//! Zone matcher - resolves a runtime zone identifier to a rule.

use zone_rules::Rule;

/// Return the first rule, in configured order, whose pattern is a substring of
/// `zone_identifier`.
///
/// Runtime identifiers carry generated prefixes and suffixes (prefab paths,
/// instance numbers), so matching is by containment. If patterns can overlap,
/// the more specific one has to come first.
pub fn match_zone<'a>(zone_identifier: &str, rules: &'a [Rule]) -> Option<&'a Rule> {
    let matched = rules.iter().find(|rule| rule.matches_zone(zone_identifier));

    if let Some(rule) = matched {
        tracing::debug!(zone = zone_identifier, pattern = %rule.zone_pattern, "zone matched rule");
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<Rule> {
        vec![
            Rule::new(""),
            Rule::new("compound").with_denied_command("kit"),
            Rule::new("bandit"),
            Rule::new("compound").with_denied_command("tp"),
        ]
    }

    #[test]
    fn test_first_match_wins() {
        let rules = rules();
        let rule = match_zone("assets/prefabs/monument/compound.prefab", &rules).unwrap();

        assert!(rule.denies("kit"));
        assert!(!rule.denies("tp"));
    }

    #[test]
    fn test_no_match() {
        let rules = rules();
        assert!(match_zone("fishing_village_a", &rules).is_none());
        assert!(match_zone("", &rules).is_none());
        assert!(match_zone("compound", &[]).is_none());
    }

    #[test]
    fn test_case_sensitive() {
        let rules = rules();
        assert!(match_zone("Bandit_Town", &rules).is_none());
        assert_eq!(
            match_zone("bandit_town", &rules).map(|r| r.zone_pattern.as_str()),
            Some("bandit")
        );
    }
}
