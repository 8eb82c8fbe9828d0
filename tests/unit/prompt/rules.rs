use super::*;

#[test]
fn both_matcher_requires_both_groups() {
    let m = Matcher::Both(&["fog", "haze"], &["thick"]);
    assert!(m.matches("thick haze"));
    assert!(!m.matches("haze"));
    assert!(!m.matches("thick smoke"));
}

#[test]
fn first_rule_for_a_field_wins() {
    let rules = [
        Rule {
            when: Matcher::Any(&["a"]),
            then: Effect::FovDeg(10.0),
        },
        Rule {
            when: Matcher::Any(&["a"]),
            then: Effect::FovDeg(20.0),
        },
    ];
    assert_eq!(evaluate(&rules, "a").fov_deg, 10.0);
}

#[test]
fn unmatched_fields_keep_defaults() {
    let s = evaluate(RULES, "nothing here");
    assert_eq!(s, SceneSettings::default());
}

#[test]
fn every_field_has_a_rule() {
    let mut seen = 0u16;
    for r in RULES {
        seen |= r.then.field().bit();
    }
    assert_eq!(seen.count_ones(), 10);
}
