//! Cost breakdown models.
//!
//! This module contains the result types produced by the calculation layer:
//! per-service [`CostLine`]s, the [`CostSharingBreakdown`] with its phase
//! totals, and the [`AnnualCost`] aggregate for one plan × scenario pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::Service;

/// How a service's events are charged to the member under a given plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSharing {
    /// A fixed copay per event. Copay-covered events never accumulate toward
    /// the deductible or coinsurance.
    Copay,
    /// The typical charge enters the deductible/coinsurance pool.
    DeductibleAndCoinsurance,
}

/// One line of a cost-sharing breakdown: all of a year's events for a single
/// service under a single sharing mode.
///
/// For copay lines, `amount` is what the member pays. For cost-shared lines,
/// `amount` is the charge that enters the pool; the member's share of the
/// pool is reported in the breakdown's phase totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// The service billed.
    pub service: Service,
    /// Number of events (visits, fills, tests).
    pub units: u32,
    /// Copay amount or typical charge per event.
    pub unit_amount: Decimal,
    /// `units * unit_amount`.
    pub amount: Decimal,
    /// How these events are charged.
    pub sharing: CostSharing,
}

/// The member's out-of-pocket position for one plan × scenario pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSharingBreakdown {
    /// Per-service lines, in catalogue order.
    pub lines: Vec<CostLine>,
    /// Sum of all copay charges.
    pub copay_total: Decimal,
    /// Cost-shared charges entering the deductible/coinsurance pool.
    pub shared_pool: Decimal,
    /// Member-paid portion of the pool below the deductible.
    pub deductible_paid: Decimal,
    /// Member-paid coinsurance on the pool above the deductible.
    pub coinsurance_paid: Decimal,
    /// Whether the out-of-pocket maximum truncated the member's cost.
    pub out_of_pocket_capped: bool,
    /// Total member cost-sharing for the year, capped at the plan's
    /// out-of-pocket maximum. When `out_of_pocket_capped` is set, the phase
    /// totals above are the pre-cap figures and this is the binding cap.
    pub total_out_of_pocket: Decimal,
}

/// Annual premium position for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPremium {
    /// Gross annual premium (monthly premium × 12).
    pub annual_premium: Decimal,
    /// Annual employer contribution toward the premium.
    pub employer_contribution: Decimal,
    /// Net annual premium cost to the member. Negative means a net subsidy.
    pub net_cost: Decimal,
}

/// HSA position for a plan year, under the fixed assumption that the account
/// is an investment vehicle and is never drawn down for current expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsaPosition {
    /// Whether the plan is HSA eligible at all.
    pub eligible: bool,
    /// Employer contribution for the year.
    pub employer_contribution: Decimal,
    /// Employee contribution filling up to the annual limit (clamped at 0).
    pub employee_contribution: Decimal,
    /// Combined contributions for the year.
    pub total_contributions: Decimal,
    /// Balance at the end of the year.
    pub balance_end_of_year: Decimal,
}

/// Total annual cost of one plan under one usage scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualCost {
    /// Name of the plan this cost was calculated for.
    pub plan_name: String,
    /// Name of the scenario this cost was calculated for.
    pub scenario_name: String,
    /// The premium position.
    pub premium: NetPremium,
    /// The out-of-pocket breakdown.
    pub cost_sharing: CostSharingBreakdown,
    /// The HSA position (all zeros for ineligible plans).
    pub hsa: HsaPosition,
    /// Net premium + total out-of-pocket.
    pub total_annual_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cost_sharing_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&CostSharing::Copay).unwrap(),
            "\"copay\""
        );
        assert_eq!(
            serde_json::to_string(&CostSharing::DeductibleAndCoinsurance).unwrap(),
            "\"deductible_and_coinsurance\""
        );
    }

    #[test]
    fn test_cost_line_round_trips_through_json() {
        let line = CostLine {
            service: Service::PrimaryCare,
            units: 4,
            unit_amount: dec("25"),
            amount: dec("100"),
            sharing: CostSharing::Copay,
        };
        let json = serde_json::to_string(&line).unwrap();
        let back: CostLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }

    #[test]
    fn test_breakdown_round_trips_through_json() {
        let breakdown = CostSharingBreakdown {
            lines: vec![],
            copay_total: dec("150"),
            shared_pool: dec("400"),
            deductible_paid: dec("400"),
            coinsurance_paid: Decimal::ZERO,
            out_of_pocket_capped: false,
            total_out_of_pocket: dec("550"),
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        let back: CostSharingBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, back);
    }
}
