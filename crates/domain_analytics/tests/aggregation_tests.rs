//! Comprehensive tests for domain_analytics

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

use domain_analytics::{
    aggregate, AggregatedRow, ClaimRecord, ClaimsTable, FilterOption, RecordError, RegionFilter,
};
use test_utils::{
    assert_policy_types_unique, assert_rows, assert_rows_conserve_total, dataset_strategy,
    region_filter_strategy, ClaimFixtures,
};

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_all_regions() {
        let dataset = ClaimFixtures::scenario_records();
        let rows = aggregate(&dataset, &RegionFilter::All);
        assert_rows(&rows, &[("Auto", dec!(150)), ("Home", dec!(200))]);
    }

    #[test]
    fn test_north_only() {
        let dataset = ClaimFixtures::scenario_records();
        let rows = aggregate(&dataset, &RegionFilter::region("North"));
        assert_rows(&rows, &[("Auto", dec!(150))]);
    }

    #[test]
    fn test_south_only() {
        let dataset = ClaimFixtures::scenario_records();
        let rows = aggregate(&dataset, &RegionFilter::region("South"));
        assert_rows(&rows, &[("Home", dec!(200))]);
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let dataset = ClaimFixtures::scenario_records();
        let rows = aggregate(&dataset, &RegionFilter::region("East"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_dataset_is_empty() {
        let rows = aggregate(&[], &RegionFilter::All);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_dropdown_value_all_selects_everything() {
        let dataset = ClaimFixtures::scenario_records();
        let rows = aggregate(&dataset, &RegionFilter::from_value("All"));
        assert_eq!(rows.len(), 2);
    }
}

// ============================================================================
// Claims Table Tests
// ============================================================================

mod table_tests {
    use super::*;

    #[test]
    fn test_regions_in_first_seen_order() {
        let table = ClaimFixtures::regional_table();
        assert_eq!(table.regions(), vec!["East", "West", "North", "South"]);
    }

    #[test]
    fn test_policy_types_in_first_seen_order() {
        let table = ClaimFixtures::regional_table();
        assert_eq!(table.policy_types(), vec!["Life", "Auto", "Home"]);
    }

    #[test]
    fn test_region_options_start_with_all() {
        let table = ClaimFixtures::scenario_table();
        let options = table.region_options();

        assert_eq!(
            options,
            vec![
                FilterOption::all_regions(),
                FilterOption::for_region("North"),
                FilterOption::for_region("South"),
            ]
        );
        assert_eq!(options[0].label, "All Regions");
        assert_eq!(options[0].value, "All");
    }

    #[test]
    fn test_empty_table_offers_only_all() {
        let table = ClaimFixtures::empty_table();
        assert!(table.is_empty());
        assert_eq!(table.region_options(), vec![FilterOption::all_regions()]);
        assert_eq!(table.total_claim_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_is_known() {
        let table = ClaimFixtures::scenario_table();
        assert!(table.is_known(&RegionFilter::All));
        assert!(table.is_known(&RegionFilter::region("North")));
        assert!(!table.is_known(&RegionFilter::region("East")));
    }

    #[test]
    fn test_table_aggregate_matches_free_function() {
        let table = ClaimFixtures::regional_table();
        let filter = RegionFilter::region("East");

        assert_eq!(table.aggregate(&filter), aggregate(table.records(), &filter));
        assert_rows(
            &table.aggregate(&filter),
            &[("Life", dec!(1200.50)), ("Auto", dec!(410.25)), ("Home", dec!(300.00))],
        );
    }

    #[test]
    fn test_total_claim_amount() {
        let table = ClaimFixtures::scenario_table();
        assert_eq!(table.total_claim_amount(), dec!(350));
    }

    #[test]
    fn test_new_table_keeps_source_order() {
        let table = ClaimsTable::new(ClaimFixtures::scenario_records()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records(), ClaimFixtures::scenario_records().as_slice());
    }

    #[test]
    fn test_new_table_rejects_unsummable_amounts() {
        let records = vec![
            ClaimFixtures::record("North", "Auto", Decimal::MAX),
            ClaimFixtures::record("South", "Home", dec!(1)),
        ];

        assert_eq!(
            ClaimsTable::new(records),
            Err(RecordError::TotalOverflow { index: 1 })
        );
    }

    #[test]
    fn test_table_at_maximum_aggregates() {
        let table = ClaimsTable::new(vec![
            ClaimFixtures::record("North", "Auto", Decimal::MAX - dec!(1)),
            ClaimFixtures::record("North", "Auto", dec!(1)),
        ])
        .unwrap();

        assert_rows(&table.aggregate(&RegionFilter::All), &[("Auto", Decimal::MAX)]);
        assert_eq!(table.total_claim_amount(), Decimal::MAX);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn all_filter_yields_one_row_per_policy_type(dataset in dataset_strategy(64)) {
        let rows = aggregate(&dataset, &RegionFilter::All);
        let distinct: HashSet<&str> = dataset.iter().map(ClaimRecord::policy_type).collect();

        prop_assert_eq!(rows.len(), distinct.len());
        assert_policy_types_unique(&rows);
        assert_rows_conserve_total(&rows, &dataset, &RegionFilter::All);
    }

    #[test]
    fn totals_do_not_depend_on_row_order(dataset in dataset_strategy(64)) {
        let mut reversed = dataset.clone();
        reversed.reverse();

        let mut forward = aggregate(&dataset, &RegionFilter::All);
        let mut backward = aggregate(&reversed, &RegionFilter::All);
        forward.sort_by(|a, b| a.policy_type.cmp(&b.policy_type));
        backward.sort_by(|a, b| a.policy_type.cmp(&b.policy_type));

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn only_matching_regions_contribute(
        dataset in dataset_strategy(64),
        filter in region_filter_strategy()
    ) {
        let rows = aggregate(&dataset, &filter);
        let matching: Vec<ClaimRecord> = dataset
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        prop_assert_eq!(&rows, &aggregate(&matching, &RegionFilter::All));
        assert_rows_conserve_total(&rows, &dataset, &filter);
    }

    #[test]
    fn aggregation_is_pure(
        dataset in dataset_strategy(64),
        filter in region_filter_strategy()
    ) {
        let before = dataset.clone();
        let first: Vec<AggregatedRow> = aggregate(&dataset, &filter);
        let second = aggregate(&dataset, &filter);

        prop_assert_eq!(first, second);
        prop_assert_eq!(dataset, before);
    }

    #[test]
    fn absent_region_yields_nothing(dataset in dataset_strategy(64)) {
        let rows = aggregate(&dataset, &RegionFilter::region("Atlantis"));
        prop_assert!(rows.is_empty());
    }
}
