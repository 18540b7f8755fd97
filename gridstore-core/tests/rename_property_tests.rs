//! Property-Based Tests for the Rename Allow-List
//!
//! The allow-list is the load-bearing safety invariant of the name updater:
//! exactly three strings parse, everything else is rejected. These tests
//! throw arbitrary strings at the parser to pin that down.

use gridstore_core::RenameTarget;
use proptest::prelude::*;

proptest! {
    /// Any string parses iff it is one of the three allow-listed values.
    #[test]
    fn only_allow_listed_strings_parse(s in "\\PC{0,24}") {
        let parsed = s.parse::<RenameTarget>();
        if RenameTarget::ALLOWED.contains(&s.as_str()) {
            prop_assert!(parsed.is_ok());
        } else {
            prop_assert!(parsed.is_err());
        }
    }

    /// Decorating an allow-listed value in any way breaks the match.
    #[test]
    fn decorated_targets_are_rejected(
        base in prop::sample::select(RenameTarget::ALLOWED.to_vec()),
        prefix in "\\PC{1,8}",
    ) {
        let decorated = format!("{prefix}{base}");
        prop_assert!(decorated.parse::<RenameTarget>().is_err());
        let decorated = format!("{base}{prefix}");
        prop_assert!(decorated.parse::<RenameTarget>().is_err());
    }

    /// The wire name round-trips through the parser.
    #[test]
    fn wire_name_round_trips(s in prop::sample::select(RenameTarget::ALLOWED.to_vec())) {
        let target: RenameTarget = s.parse().unwrap();
        prop_assert_eq!(target.as_str(), s);
        prop_assert_eq!(target.as_str().parse::<RenameTarget>(), Ok(target));
    }
}
