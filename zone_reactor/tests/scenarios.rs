//! End-to-end scenarios: events in, effector calls out.

mod common;

use common::{compound_rule, Call, RecordingEffector};
use zone_reactor::{EventOutcome, NoPermissions, ZoneEvent, ZoneReactor};
use zone_rules::{overlapping, ActorContext, MonumentZone, Position, RuleTable, ZoneBounds, ZoneConfig};

fn bob() -> ActorContext {
    ActorContext::new(123, "Bob")
}

#[test]
fn entering_compound_fires_enter_actions_in_order() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let effector = RecordingEffector::default();

    let outcome = reactor.on_enter(&bob(), "compound_1", &effector);

    assert_eq!(
        outcome,
        EventOutcome::Triggered {
            actions: 2,
            message_sent: false
        }
    );
    assert_eq!(
        effector.calls(),
        vec![
            Call::Direct {
                actor: 123,
                command: "chat.say \"Hi Bob\"".to_string()
            },
            Call::Privileged {
                command: "give 123 scrap 50".to_string()
            },
        ]
    );
}

#[test]
fn leaving_compound_runs_untemplated_command() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let effector = RecordingEffector::default();

    reactor.on_leave(&bob(), "compound_1", &effector);

    assert_eq!(
        effector.calls(),
        vec![Call::Direct {
            actor: 123,
            command: "heli.calltome".to_string()
        }]
    );
}

#[test]
fn denied_command_inside_compound_is_blocked() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let effector = RecordingEffector::default();

    let zones = vec![MonumentZone::new(
        "compound_1",
        ZoneBounds::new(Position::new(0.0, 0.0, 0.0), Position::new(80.0, 40.0, 80.0)),
    )];
    let actor = bob().at(Position::new(12.0, 1.0, -30.0)).in_safe_zone(true);

    let outcome = reactor.on_command(
        &actor,
        "KIT",
        overlapping(&zones, actor.position),
        &effector,
        &NoPermissions,
    );

    assert!(outcome.is_blocked());
    assert_eq!(
        effector.calls(),
        vec![Call::Message {
            actor: 123,
            message: "You cannot use this command in the safe zone.".to_string()
        }]
    );
}

#[test]
fn allowed_command_makes_no_effector_call() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let effector = RecordingEffector::default();

    let event = ZoneEvent::CommandAttempted {
        actor: bob().in_safe_zone(true),
        command: "remove".to_string(),
        zones: vec!["compound_1".to_string()],
    };

    assert_eq!(
        reactor.handle(&event, &effector, &NoPermissions),
        EventOutcome::Allowed
    );
    assert!(effector.calls().is_empty());
}

#[test]
fn actor_outside_monument_bounds_is_not_blocked() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let effector = RecordingEffector::default();

    let zones = vec![MonumentZone::new(
        "compound_1",
        ZoneBounds::new(Position::new(0.0, 0.0, 0.0), Position::new(80.0, 40.0, 80.0)),
    )];
    let actor = bob().at(Position::new(500.0, 0.0, 0.0)).in_safe_zone(true);

    let outcome = reactor.on_command(
        &actor,
        "kit",
        overlapping(&zones, actor.position),
        &effector,
        &NoPermissions,
    );

    assert_eq!(outcome, EventOutcome::Allowed);
}

#[test]
fn stock_config_round_trip_through_json() {
    let json = ZoneConfig::default().to_json_pretty().unwrap();
    assert!(json.contains("\"Monument Name\": \"compound\""));

    let table = ZoneConfig::from_json_str(&json)
        .unwrap()
        .to_rule_table()
        .unwrap();
    let reactor = ZoneReactor::seeded(table, 0);
    let effector = RecordingEffector::default();

    let outcome = reactor.on_leave(&bob(), "compound_1", &effector);

    assert_eq!(
        outcome,
        EventOutcome::Triggered {
            actions: 1,
            message_sent: true
        }
    );
    assert_eq!(
        effector.calls().last(),
        Some(&Call::Message {
            actor: 123,
            message: "Goodbye, Bob. Hope you had a great time at Compound!".to_string()
        })
    );
}

#[test]
fn concurrent_events_see_whole_tables() {
    let reactor = ZoneReactor::seeded(RuleTable::new(vec![compound_rule()]), 0);
    let bandit_table = || {
        RuleTable::new(vec![zone_rules::Rule::new("compound").with_denied_command("home")])
    };

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let effector = RecordingEffector::default();
                let actor = bob().in_safe_zone(true);
                for _ in 0..200 {
                    let table = reactor.table();
                    let rule = &table.rules()[0];
                    // Either the original rule or its replacement, never a mix.
                    assert!(rule.denies("kit") != rule.denies("home"));
                    reactor.on_command(&actor, "kit", ["compound_1"], &effector, &NoPermissions);
                }
            });
        }

        scope.spawn(|| {
            for i in 0..200 {
                if i % 2 == 0 {
                    reactor.reload(bandit_table());
                } else {
                    reactor.reload(RuleTable::new(vec![compound_rule()]));
                }
            }
        });
    });
}
