//! Cost-sharing calculation: copays, deductible, coinsurance and the
//! out-of-pocket maximum.
//!
//! ## Copay policy
//!
//! Real plans differ on whether copays count toward the deductible. This
//! engine uses one explicit policy throughout: **an event whose category has
//! a copay greater than zero costs the member exactly that copay, and is
//! excluded from deductible and coinsurance accumulation**. Events without a
//! copay pool their typical charges; the member pays 100% of the pool up to
//! the deductible, then the coinsurance rate on the remainder. Total member
//! cost-sharing (copays + deductible phase + coinsurance phase) is capped at
//! the plan's out-of-pocket maximum.
//!
//! The calculation works on pooled per-category dollar totals, so the result
//! does not depend on any ordering of events within the year.

use rust_decimal::Decimal;

use crate::models::{
    CostLine, CostSharing, CostSharingBreakdown, DrugTier, Plan, PriceList, Service, TestCategory,
    UsageScenario, VisitCategory,
};

/// Calculates the member's out-of-pocket position for one plan × scenario
/// pair.
///
/// Pure and total over validated inputs: callers are expected to have run
/// [`Plan::validate`] and [`UsageScenario::validate`] (the
/// [`calculate_annual_cost`](super::calculate_annual_cost) orchestrator does
/// this) and no input that passed validation can make this function fail.
///
/// When the out-of-pocket maximum binds, `total_out_of_pocket` is the cap and
/// `out_of_pocket_capped` is set; the per-phase figures keep their pre-cap
/// values so the report can show where the spending came from.
///
/// # Example
///
/// ```
/// use healthplan_engine::calculation::calculate_cost_sharing;
/// use healthplan_engine::models::{
///     CopayCategory, Plan, PriceList, Service, UsageScenario, VisitCategory,
/// };
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let plan = Plan {
///     name: "Premium PPO".to_string(),
///     deductible: Decimal::from(2000),
///     out_of_pocket_max: Decimal::from(6500),
///     coinsurance_rate: Decimal::from_str("0.10").unwrap(),
///     copays: HashMap::from([(CopayCategory::PrimaryCare, Decimal::from(25))]),
///     ..Plan::default()
/// };
/// let scenario = UsageScenario {
///     name: "Checkups".to_string(),
///     visits: HashMap::from([(VisitCategory::PrimaryCare, 4)]),
///     ..UsageScenario::default()
/// };
/// let prices = PriceList::new(HashMap::from([(
///     Service::PrimaryCare,
///     Decimal::from(150),
/// )]));
///
/// let breakdown = calculate_cost_sharing(&plan, &scenario, &prices);
/// assert_eq!(breakdown.copay_total, Decimal::from(100));
/// assert_eq!(breakdown.total_out_of_pocket, Decimal::from(100));
/// ```
pub fn calculate_cost_sharing(
    plan: &Plan,
    scenario: &UsageScenario,
    prices: &PriceList,
) -> CostSharingBreakdown {
    let mut lines = Vec::new();
    let mut copay_total = Decimal::ZERO;
    let mut shared_pool = Decimal::ZERO;

    let mut add_events = |service: Service, units: u32, copay: Decimal| {
        if units == 0 {
            return;
        }
        if copay > Decimal::ZERO {
            let amount = Decimal::from(units) * copay;
            copay_total += amount;
            lines.push(CostLine {
                service,
                units,
                unit_amount: copay,
                amount,
                sharing: CostSharing::Copay,
            });
        } else {
            let charge = prices.charge(service);
            let amount = Decimal::from(units) * charge;
            shared_pool += amount;
            lines.push(CostLine {
                service,
                units,
                unit_amount: charge,
                amount,
                sharing: CostSharing::DeductibleAndCoinsurance,
            });
        }
    };

    for category in VisitCategory::ALL {
        let copay = category
            .copay_category()
            .map(|c| plan.copay(c))
            .unwrap_or(Decimal::ZERO);
        add_events(category.service(), scenario.visit_count(category), copay);
    }
    for tier in DrugTier::ALL {
        add_events(
            tier.service(),
            scenario.fill_count(tier),
            plan.copay(tier.copay_category()),
        );
    }
    for category in TestCategory::ALL {
        // Tests never carry a copay; they are always cost-shared.
        add_events(category.service(), scenario.test_count(category), Decimal::ZERO);
    }

    let deductible_paid = shared_pool.min(plan.deductible);
    let coinsurance_paid = (shared_pool - deductible_paid) * plan.coinsurance_rate;

    let uncapped = copay_total + deductible_paid + coinsurance_paid;
    let out_of_pocket_capped = uncapped > plan.out_of_pocket_max;
    let total_out_of_pocket = uncapped.min(plan.out_of_pocket_max);

    CostSharingBreakdown {
        lines,
        copay_total,
        shared_pool,
        deductible_paid,
        coinsurance_paid,
        out_of_pocket_capped,
        total_out_of_pocket,
    }
}
