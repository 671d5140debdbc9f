//! Property-based tests for similarity metric mathematical properties.
//!
//! These tests verify the contract every metric and composite shares:
//!
//! 1. **Range**: every score lies in [0, 100]
//! 2. **Identity**: a name compared with itself scores 100 (where defined)
//! 3. **Symmetry**: score(a, b) = score(b, a)
//! 4. **Composite arithmetic**: composites are exact unweighted means
//! 5. **Edit-op round trip**: applying the reported operations to the
//!    lowercased source reproduces the lowercased target

use namescreen::distance::{apply_edit_ops, edit_ops, standard_distance};
use namescreen::metrics::*;
use proptest::prelude::*;

// String generators
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,16}").unwrap()
}

fn arb_nonshort_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{2,16}").unwrap()
}

fn arb_spaced_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,8}( [a-zA-Z]{1,8}){0,2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn every_score_in_range(a in arb_spaced_name(), b in arb_spaced_name()) {
        for (label, score) in MetricBundle::compute(&a, &b).labeled() {
            prop_assert!(
                (0.0..=100.0).contains(&score),
                "{} = {} out of range for '{}' vs '{}'",
                label, score, a, b
            );
        }
    }

    #[test]
    fn edit_distance_ratio_identity(a in arb_name()) {
        prop_assert_eq!(edit_distance_ratio(&a, &a), 100.0);
    }

    #[test]
    fn ngram_overlap_ratio_identity(a in arb_nonshort_name()) {
        prop_assert_eq!(ngram_overlap_ratio(&a, &a), 100.0);
    }

    #[test]
    fn metrics_symmetric(a in arb_spaced_name(), b in arb_spaced_name()) {
        prop_assert_eq!(edit_distance_ratio(&a, &b), edit_distance_ratio(&b, &a));
        prop_assert_eq!(ngram_overlap_ratio(&a, &b), ngram_overlap_ratio(&b, &a));
        prop_assert_eq!(soundex_ratio(&a, &b), soundex_ratio(&b, &a));
        prop_assert_eq!(nysiis_ratio(&a, &b), nysiis_ratio(&b, &a));
        prop_assert_eq!(metaphone_ratio(&a, &b), metaphone_ratio(&b, &a));
    }

    #[test]
    fn composites_symmetric(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(phonetic_composite(&a, &b), phonetic_composite(&b, &a));
        prop_assert_eq!(
            orthographic_composite(&a, &b),
            orthographic_composite(&b, &a)
        );
        prop_assert_eq!(overall_average(&a, &b), overall_average(&b, &a));
    }

    #[test]
    fn composite_arithmetic_exact(a in arb_name(), b in arb_name()) {
        let bundle = MetricBundle::compute(&a, &b);
        prop_assert_eq!(
            bundle.phonetic_composite,
            (bundle.metaphone + bundle.soundex + bundle.nysiis) / 3.0
        );
        prop_assert_eq!(
            bundle.orthographic_composite,
            (bundle.orthographic + bundle.ngram) / 2.0
        );
        prop_assert_eq!(
            bundle.overall,
            (bundle.phonetic_composite + bundle.orthographic_composite) / 2.0
        );
    }

    #[test]
    fn edit_ops_round_trip(a in arb_name(), b in arb_name()) {
        let ops = edit_ops(&a, &b);
        prop_assert_eq!(
            apply_edit_ops(&a.to_lowercase(), &ops),
            b.to_lowercase(),
            "round trip failed for '{}' vs '{}'",
            a, b
        );
    }

    #[test]
    fn edit_ops_count_matches_distance(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(
            edit_ops(&a, &b).len(),
            standard_distance(&a.to_lowercase(), &b.to_lowercase())
        );
    }

    #[test]
    fn distance_symmetric(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(standard_distance(&a, &b), standard_distance(&b, &a));
    }
}
