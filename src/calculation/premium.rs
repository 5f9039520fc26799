//! Net premium calculation.

use rust_decimal::Decimal;

use crate::models::{NetPremium, Plan};

/// Calculates the plan's annual premium position.
///
/// `net_cost` is the gross annual premium minus the employer's annual
/// contribution. A negative net cost is allowed and represents a net subsidy.
///
/// # Example
///
/// ```
/// use healthplan_engine::calculation::calculate_net_premium;
/// use healthplan_engine::models::Plan;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let plan = Plan {
///     name: "Premium PPO".to_string(),
///     monthly_premium: Decimal::from_str("292.90").unwrap(),
///     annual_employer_contribution: Decimal::from(600),
///     ..Plan::default()
/// };
///
/// let premium = calculate_net_premium(&plan);
/// assert_eq!(premium.annual_premium, Decimal::from_str("3514.80").unwrap());
/// assert_eq!(premium.net_cost, Decimal::from_str("2914.80").unwrap());
/// ```
pub fn calculate_net_premium(plan: &Plan) -> NetPremium {
    let annual_premium = plan.monthly_premium * Decimal::from(12);
    NetPremium {
        annual_premium,
        employer_contribution: plan.annual_employer_contribution,
        net_cost: annual_premium - plan.annual_employer_contribution,
    }
}
