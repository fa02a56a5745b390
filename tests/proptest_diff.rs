//! Property-based tests for the differ and classifier.
//!
//! Generates small nested configuration trees and checks the structural
//! invariants of `diff_values` and `RiskClassifier`.

use cfgdiff::diff::{diff_values, ChangeKind};
use cfgdiff::model::deep_equal;
use cfgdiff::risk::RiskClassifier;
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Field names drawn from a small pool so generated trees overlap, hit the
/// built-in rules and mix dotted keys with nested ones.
fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("timeout".to_string()),
        Just("enabled".to_string()),
        Just("host".to_string()),
        Just("secret".to_string()),
        Just("name".to_string()),
        Just("db".to_string()),
        Just("a".to_string()),
        Just("a.b".to_string()),
        Just("clientSecret".to_string()),
        "[a-z]{1,6}",
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        (-100.0f64..100.0).prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map(key(), inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key(), tree(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

fn paths(changes: &[cfgdiff::diff::ChangeRecord], kind: ChangeKind) -> BTreeSet<String> {
    changes
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.path.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn diff_with_self_is_empty(a in document()) {
        prop_assert!(diff_values(&a, &a).is_empty());
    }

    #[test]
    fn diff_is_symmetric(a in document(), b in document()) {
        let forward = diff_values(&a, &b);
        let backward = diff_values(&b, &a);

        prop_assert_eq!(paths(&forward, ChangeKind::Added), paths(&backward, ChangeKind::Removed));
        prop_assert_eq!(paths(&forward, ChangeKind::Removed), paths(&backward, ChangeKind::Added));
        prop_assert_eq!(
            paths(&forward, ChangeKind::Modified),
            paths(&backward, ChangeKind::Modified)
        );
    }

    #[test]
    fn modified_values_differ(a in document(), b in document()) {
        for change in diff_values(&a, &b) {
            match change.kind {
                ChangeKind::Modified => {
                    let old = change.old_value.as_ref().unwrap();
                    let new = change.new_value.as_ref().unwrap();
                    prop_assert!(!deep_equal(old, new), "{} unchanged", change.path);
                }
                ChangeKind::Added => {
                    prop_assert!(change.old_value.is_none() && change.new_value.is_some());
                }
                ChangeKind::Removed => {
                    prop_assert!(change.old_value.is_some() && change.new_value.is_none());
                }
            }
        }
    }

    #[test]
    fn paths_are_unique(a in document(), b in document()) {
        let changes = diff_values(&a, &b);
        let unique: BTreeSet<_> = changes.iter().map(|c| c.path.as_str()).collect();
        prop_assert_eq!(unique.len(), changes.len());
    }

    #[test]
    fn at_most_one_impact_per_change(a in document(), b in document()) {
        let changes = diff_values(&a, &b);
        let impacts = RiskClassifier::new().classify(&changes);

        prop_assert!(impacts.len() <= changes.len());
        let change_paths: BTreeSet<_> = changes.iter().map(|c| c.path.as_str()).collect();
        let impact_paths: BTreeSet<_> = impacts.iter().map(|i| i.path.as_str()).collect();
        prop_assert_eq!(impact_paths.len(), impacts.len());
        prop_assert!(impact_paths.is_subset(&change_paths));
    }

    #[test]
    fn removals_always_reported(a in document()) {
        let empty = Value::Object(Map::new());
        let changes = diff_values(&a, &empty);
        let impacts = RiskClassifier::new().classify(&changes);
        prop_assert_eq!(impacts.len(), changes.len());
    }
}
