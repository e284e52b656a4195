//! Claim record

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RecordError;

/// A single insurance claim row of the dashboard dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRecord {
    /// Region label the claim was filed in
    region: String,
    /// Policy type label (e.g. "Auto", "Home")
    policy_type: String,
    /// Claimed amount, never negative
    claim_amount: Decimal,
}

impl ClaimRecord {
    /// Creates a claim record
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NegativeAmount` if `claim_amount` is below zero
    pub fn new(
        region: impl Into<String>,
        policy_type: impl Into<String>,
        claim_amount: Decimal,
    ) -> Result<Self, RecordError> {
        if claim_amount.is_sign_negative() && !claim_amount.is_zero() {
            return Err(RecordError::NegativeAmount(claim_amount));
        }

        Ok(Self {
            region: region.into(),
            policy_type: policy_type.into(),
            claim_amount,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn policy_type(&self) -> &str {
        &self.policy_type
    }

    pub fn claim_amount(&self) -> Decimal {
        self.claim_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_amount_rejected() {
        let result = ClaimRecord::new("North", "Auto", dec!(-0.01));
        assert_eq!(result, Err(RecordError::NegativeAmount(dec!(-0.01))));
    }

    #[test]
    fn test_negative_zero_accepted() {
        let record = ClaimRecord::new("North", "Auto", -dec!(0)).unwrap();
        assert!(record.claim_amount().is_zero());
    }
}
