//! Member and total cost as a function of raw medical spend.
//!
//! For breakeven analysis a scenario's itemized utilization is replaced by a
//! single pre-insurance spend level, treated as entirely cost-shared (no
//! copays). The member cost is then a piecewise-linear function of spend:
//! 100% up to the deductible, the coinsurance rate up to the out-of-pocket
//! maximum, and flat beyond it.

use rust_decimal::Decimal;

use crate::models::Plan;

/// The member's out-of-pocket cost at a given pre-insurance spend level.
///
/// Spend levels at or below zero cost nothing.
pub fn member_cost_at_spend(plan: &Plan, spend: Decimal) -> Decimal {
    if spend <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let deductible_paid = spend.min(plan.deductible);
    let coinsurance_paid = (spend - deductible_paid) * plan.coinsurance_rate;
    (deductible_paid + coinsurance_paid).min(plan.out_of_pocket_max)
}

/// The member's total annual cost (net premium + out-of-pocket) at a given
/// pre-insurance spend level.
pub fn total_cost_at_spend(plan: &Plan, spend: Decimal) -> Decimal {
    plan.annual_premium_cost() + member_cost_at_spend(plan, spend)
}

/// The spend level beyond which the member cost curve is flat: either the
/// out-of-pocket maximum has been reached, or (with zero coinsurance) the
/// deductible has.
///
/// A near-zero coinsurance rate pushes the threshold past what `Decimal` can
/// represent; the curve is then still rising over the whole representable
/// range, so the threshold saturates at [`Decimal::MAX`] instead of
/// overflowing.
pub fn flat_spend_threshold(plan: &Plan) -> Decimal {
    if plan.coinsurance_rate.is_zero() {
        return plan.deductible;
    }
    // Spend at which deductible + coinsurance reaches the out-of-pocket max.
    let headroom = plan.out_of_pocket_max - plan.deductible;
    match headroom.checked_div(plan.coinsurance_rate) {
        Some(span) => plan.deductible.checked_add(span).unwrap_or(Decimal::MAX),
        None => Decimal::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn plan(deductible: &str, oop_max: &str, coinsurance: &str) -> Plan {
        Plan {
            name: "test".to_string(),
            monthly_premium: dec("100"),
            deductible: dec(deductible),
            out_of_pocket_max: dec(oop_max),
            coinsurance_rate: dec(coinsurance),
            ..Plan::default()
        }
    }

    #[test]
    fn test_zero_and_negative_spend_cost_nothing() {
        let p = plan("2000", "6500", "0.10");
        assert_eq!(member_cost_at_spend(&p, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(member_cost_at_spend(&p, dec("-50")), Decimal::ZERO);
    }

    #[test]
    fn test_below_deductible_member_pays_everything() {
        let p = plan("2000", "6500", "0.10");
        assert_eq!(member_cost_at_spend(&p, dec("1500")), dec("1500"));
    }

    #[test]
    fn test_above_deductible_member_pays_coinsurance() {
        let p = plan("2000", "6500", "0.10");
        // 2000 + 10% of 3000.
        assert_eq!(member_cost_at_spend(&p, dec("5000")), dec("2300"));
    }

    #[test]
    fn test_out_of_pocket_max_caps_the_curve() {
        let p = plan("2000", "6500", "0.10");
        assert_eq!(member_cost_at_spend(&p, dec("1000000")), dec("6500"));
    }

    #[test]
    fn test_total_cost_adds_net_premium() {
        let p = plan("2000", "6500", "0.10");
        assert_eq!(
            total_cost_at_spend(&p, dec("1500")),
            p.annual_premium_cost() + dec("1500")
        );
    }

    #[test]
    fn test_flat_threshold_with_coinsurance() {
        let p = plan("2000", "6500", "0.10");
        // 2000 + 4500 / 0.10.
        assert_eq!(flat_spend_threshold(&p), dec("47000"));
        assert_eq!(
            member_cost_at_spend(&p, flat_spend_threshold(&p)),
            dec("6500")
        );
    }

    #[test]
    fn test_flat_threshold_saturates_for_tiny_coinsurance() {
        // The smallest representable rate still passes validation; the
        // division would overflow without the guard.
        let p = Plan {
            coinsurance_rate: Decimal::new(1, 28),
            ..plan("2000", "6500", "0.10")
        };
        assert!(p.validate().is_ok());
        assert_eq!(flat_spend_threshold(&p), Decimal::MAX);
        assert!(member_cost_at_spend(&p, Decimal::MAX) <= p.out_of_pocket_max);
    }

    #[test]
    fn test_flat_threshold_with_zero_coinsurance() {
        let p = plan("2000", "6500", "0");
        assert_eq!(flat_spend_threshold(&p), dec("2000"));
        assert_eq!(member_cost_at_spend(&p, dec("100000")), dec("2000"));
    }

    #[test]
    fn test_curve_is_monotone_non_decreasing() {
        let p = plan("2000", "6500", "0.10");
        let mut last = Decimal::ZERO;
        for spend in 0..200 {
            let cost = member_cost_at_spend(&p, Decimal::from(spend * 500));
            assert!(cost >= last);
            last = cost;
        }
    }
}
