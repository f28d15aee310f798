//! Property-based tests for the plan engine.
//!
//! These use proptest to verify invariants across many generated inputs,
//! catching edge cases that hand-written tests might miss.

use benchplan::plan::{arguments, GroupSelection, Kind, PlanError};
use benchplan::{PlanConfig, TestRegistry};
use proptest::prelude::*;

// =============================================================================
// Argument grammar properties
// =============================================================================

proptest! {
    /// Property: parse followed by render round-trips to an equivalent
    /// key/value set.
    #[test]
    fn parse_render_round_trips(
        map in prop::collection::btree_map(
            "[A-Za-z][A-Za-z0-9_]{0,7}",
            "[A-Za-z0-9_./:-]{0,12}",
            1..6,
        )
    ) {
        let raw = arguments::render(&map);
        let reparsed = arguments::parse(&raw).unwrap();
        prop_assert_eq!(reparsed, map);
    }

    /// Property: whitespace around keys and values never survives parsing.
    #[test]
    fn parse_trims_both_halves(
        key in "[A-Za-z][A-Za-z0-9_]{0,7}",
        value in "[A-Za-z0-9_.]{0,12}",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let raw = format!("{pad_left}{key}{pad_right}={pad_left}{value}{pad_right}");
        let map = arguments::parse(&raw).unwrap();
        prop_assert_eq!(map.get(&key).map(String::as_str), Some(value.as_str()));
    }
}

// =============================================================================
// Numerical kind properties
// =============================================================================

proptest! {
    /// Property: every constructed Numerical satisfies low <= high.
    #[test]
    fn numerical_always_satisfies_bound_ordering(
        a in -1.0e6..1.0e6f64,
        b in -1.0e6..1.0e6f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let raw = format!("High={high}|Low={low}|Unit=V|UnitType=DC");
        let kind = Kind::resolve("Numerical", "P1", &raw).unwrap();
        let Kind::Numerical(numerical) = kind else {
            panic!("expected Numerical");
        };
        prop_assert!(numerical.low <= numerical.high);
        prop_assert_eq!(numerical.low, low);
        prop_assert_eq!(numerical.high, high);
    }

    /// Property: inverted bounds never construct an object.
    #[test]
    fn numerical_inverted_bounds_never_construct(
        a in -1.0e6..1.0e6f64,
        b in -1.0e6..1.0e6f64,
    ) {
        prop_assume!(a != b);
        let (low, high) = if a > b { (a, b) } else { (b, a) };
        let raw = format!("High={high}|Low={low}|Unit=V|UnitType=DC");
        let err = Kind::resolve("Numerical", "P1", &raw).unwrap_err();
        prop_assert!(matches!(err, PlanError::InvalidValueFormat { .. }), "expected InvalidValueFormat");
    }

    /// Property: a wrong pair count is always an arity error, not a generic one.
    #[test]
    fn textual_wrong_arity_is_always_an_arity_error(extra in 1usize..4) {
        let mut raw = "Text=hello".to_string();
        for i in 0..extra {
            raw.push_str(&format!("|K{i}=v"));
        }
        let err = Kind::resolve("Textual", "P2", &raw).unwrap_err();
        prop_assert!(matches!(err, PlanError::InvalidArgumentCount { .. }), "expected InvalidArgumentCount");
    }
}

// =============================================================================
// Group resolution properties
// =============================================================================

proptest! {
    /// Property: the resolved subset's order matches the group's declared
    /// order, and the padding width tracks the longest identifier.
    #[test]
    fn group_resolution_preserves_declared_order(
        ids in prop::collection::btree_set("[A-Z][A-Z0-9]{1,6}", 1..8)
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut plan = String::new();
        for id in &ids {
            plan.push_str(&format!(
                "[[test]]\nid = \"{id}\"\ndescription = \"\"\nrevision = \"\"\nkind = \"Textual\"\nargs = \"Text=x\"\n\n"
            ));
        }
        // Declare the group in the reverse of registry order to prove the
        // group's own order wins.
        let members: Vec<&str> = ids.iter().rev().map(String::as_str).collect();
        plan.push_str(&format!(
            "[[group]]\nid = \"G\"\ndescription = \"\"\ntests = \"{}\"\n",
            members.join("|")
        ));

        let config = PlanConfig::from_toml_str(&plan).unwrap();
        let registry = TestRegistry::load(&config).unwrap();
        let selection = GroupSelection::resolve(config.group("G").unwrap(), &registry).unwrap();

        prop_assert_eq!(selection.ids().collect::<Vec<_>>(), members);
        let longest = ids.iter().map(|id| id.len()).max().unwrap();
        prop_assert_eq!(selection.label_width(), longest + 1);
    }
}
