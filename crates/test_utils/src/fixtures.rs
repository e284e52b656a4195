//! Pre-built Test Fixtures
//!
//! Ready-to-use claims data. The three-record scenario is the canonical
//! example used across the crates: two North/Auto claims and one South/Home
//! claim.

use domain_analytics::{ClaimRecord, ClaimsTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for claim records and tables
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Creates a record, panicking on a negative amount
    pub fn record(region: &str, policy_type: &str, amount: Decimal) -> ClaimRecord {
        ClaimRecord::new(region, policy_type, amount).expect("fixture amount must be non-negative")
    }

    /// North/Auto 100, North/Auto 50, South/Home 200
    pub fn scenario_records() -> Vec<ClaimRecord> {
        vec![
            Self::record("North", "Auto", dec!(100)),
            Self::record("North", "Auto", dec!(50)),
            Self::record("South", "Home", dec!(200)),
        ]
    }

    /// Wraps records in a table, panicking if their total overflows
    pub fn table(records: Vec<ClaimRecord>) -> ClaimsTable {
        ClaimsTable::new(records).expect("fixture total must fit in a Decimal")
    }

    /// The scenario records wrapped in a table
    pub fn scenario_table() -> ClaimsTable {
        Self::table(Self::scenario_records())
    }

    /// A wider table spanning four regions and three policy types
    pub fn regional_table() -> ClaimsTable {
        Self::table(vec![
            Self::record("East", "Life", dec!(1200.50)),
            Self::record("West", "Auto", dec!(830.00)),
            Self::record("East", "Auto", dec!(410.25)),
            Self::record("North", "Home", dec!(2500.00)),
            Self::record("South", "Life", dec!(760.75)),
            Self::record("West", "Home", dec!(1999.99)),
            Self::record("East", "Home", dec!(300.00)),
        ])
    }

    /// The empty table
    pub fn empty_table() -> ClaimsTable {
        ClaimsTable::default()
    }
}

/// Fixture for CSV text fed to the loader
pub struct CsvFixtures;

impl CsvFixtures {
    /// The scenario as CSV, with an extra column the loader must ignore
    pub fn scenario_csv() -> &'static str {
        "claim_id,region,policy_type,claim_amount\n\
         C-1,North,Auto,100\n\
         C-2,North,Auto,50\n\
         C-3,South,Home,200\n"
    }

    /// Header without the `claim_amount` column
    pub fn missing_amount_column_csv() -> &'static str {
        "region,policy_type\nNorth,Auto\n"
    }

    /// Second data row carries a non-numeric amount
    pub fn malformed_amount_csv() -> &'static str {
        "region,policy_type,claim_amount\n\
         North,Auto,100\n\
         North,Auto,n/a\n\
         South,Home,200\n"
    }

    /// Amounts whose sum exceeds the largest `Decimal`
    pub fn overflowing_total_csv() -> &'static str {
        "region,policy_type,claim_amount\n\
         North,Auto,79228162514264337593543950335\n\
         North,Auto,1\n\
         South,Home,200\n"
    }

    /// Second data row has an empty amount, third a negative one
    pub fn blank_and_negative_amount_csv() -> &'static str {
        "region,policy_type,claim_amount\n\
         North,Auto,100\n\
         North,Home,\n\
         South,Home,-5\n"
    }
}
