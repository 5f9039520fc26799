//! Total annual cost orchestration.

use crate::error::EngineResult;
use crate::models::{AnnualCost, Plan, PriceList, UsageScenario};

use super::cost_sharing::calculate_cost_sharing;
use super::hsa::calculate_hsa_position;
use super::premium::calculate_net_premium;

/// Calculates the member's total annual cost for one plan under one usage
/// scenario: net premium plus total out-of-pocket medical spend.
///
/// This is the validation boundary. Plan, scenario and price list are checked
/// here and an [`EngineError`](crate::error::EngineError) comes back for
/// malformed inputs; the underlying calculations are pure and total once
/// validation has passed.
///
/// # Example
///
/// ```
/// use healthplan_engine::calculation::calculate_annual_cost;
/// use healthplan_engine::models::{Plan, PriceList, UsageScenario};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let plan = Plan {
///     name: "Premium PPO".to_string(),
///     monthly_premium: Decimal::from_str("292.90").unwrap(),
///     annual_employer_contribution: Decimal::from(600),
///     out_of_pocket_max: Decimal::from(6500),
///     ..Plan::default()
/// };
/// let scenario = UsageScenario {
///     name: "Nothing".to_string(),
///     ..UsageScenario::default()
/// };
///
/// let cost = calculate_annual_cost(&plan, &scenario, &PriceList::default()).unwrap();
/// // With zero utilization the total is exactly the net premium.
/// assert_eq!(cost.total_annual_cost, Decimal::from_str("2914.80").unwrap());
/// ```
pub fn calculate_annual_cost(
    plan: &Plan,
    scenario: &UsageScenario,
    prices: &PriceList,
) -> EngineResult<AnnualCost> {
    plan.validate()?;
    scenario.validate()?;
    prices.validate()?;

    let premium = calculate_net_premium(plan);
    let cost_sharing = calculate_cost_sharing(plan, scenario, prices);
    let hsa = calculate_hsa_position(plan);
    let total_annual_cost = premium.net_cost + cost_sharing.total_out_of_pocket;

    Ok(AnnualCost {
        plan_name: plan.name.clone(),
        scenario_name: scenario.name.clone(),
        premium,
        cost_sharing,
        hsa,
        total_annual_cost,
    })
}
