//! Breakeven search between two plans.
//!
//! Both plans' total-cost curves are continuous and piecewise linear in the
//! pre-insurance spend level, so their difference is too. The difference can
//! only change slope at one of the plans' deductibles or flat thresholds, so
//! scanning the segments between those breakpoints finds every sign change,
//! and linear interpolation inside a bracketing segment lands on the crossing
//! exactly. Beyond both flat thresholds the difference is constant, so
//! nothing past the last breakpoint needs searching.

use rust_decimal::Decimal;

use crate::models::Plan;

use super::spend_curve::{flat_spend_threshold, total_cost_at_spend};

/// Accuracy guarantee on a reported breakeven: feeding the returned spend
/// back into [`total_cost_at_spend`] for both plans yields totals within this
/// many dollars of each other.
pub const BREAKEVEN_TOLERANCE: Decimal = Decimal::ONE;

/// Finds the lowest pre-insurance spend level at which two plans cost the
/// same.
///
/// A breakeven requires the curves to actually meet: the difference is zero
/// at some spend level, or changes sign across one. Returns `None` when one
/// plan is cheaper at every spend level, even if the two curves run within
/// [`BREAKEVEN_TOLERANCE`] of each other the whole way. The tolerance is the
/// accuracy guarantee on the returned spend, not an equality threshold.
///
/// # Example
///
/// ```
/// use healthplan_engine::calculation::{find_breakeven, total_cost_at_spend};
/// use healthplan_engine::models::Plan;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ppo = Plan {
///     name: "PPO".to_string(),
///     monthly_premium: Decimal::from_str("292.90").unwrap(),
///     annual_employer_contribution: Decimal::from(600),
///     deductible: Decimal::from(2000),
///     out_of_pocket_max: Decimal::from(6500),
///     coinsurance_rate: Decimal::from_str("0.10").unwrap(),
///     ..Plan::default()
/// };
/// let hdhp = Plan {
///     name: "HDHP".to_string(),
///     monthly_premium: Decimal::from_str("133.21").unwrap(),
///     annual_employer_contribution: Decimal::from(300),
///     deductible: Decimal::from(4000),
///     out_of_pocket_max: Decimal::from(8000),
///     coinsurance_rate: Decimal::from_str("0.10").unwrap(),
///     ..Plan::default()
/// };
///
/// let spend = find_breakeven(&ppo, &hdhp).unwrap();
/// let gap = (total_cost_at_spend(&ppo, spend) - total_cost_at_spend(&hdhp, spend)).abs();
/// assert!(gap <= Decimal::ONE);
/// ```
pub fn find_breakeven(plan_a: &Plan, plan_b: &Plan) -> Option<Decimal> {
    let diff =
        |spend: Decimal| total_cost_at_spend(plan_a, spend) - total_cost_at_spend(plan_b, spend);

    let ceiling = flat_spend_threshold(plan_a).max(flat_spend_threshold(plan_b));

    // Slope of the difference can only change at these spend levels.
    let mut knots = vec![
        Decimal::ZERO,
        plan_a.deductible,
        plan_b.deductible,
        flat_spend_threshold(plan_a),
        flat_spend_threshold(plan_b),
        ceiling,
    ];
    knots.retain(|k| *k >= Decimal::ZERO && *k <= ceiling);
    knots.sort();
    knots.dedup();

    for pair in knots.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let diff_lo = diff(lo);
        if diff_lo.is_zero() {
            return Some(lo);
        }
        let diff_hi = diff(hi);
        if diff_lo.is_sign_positive() != diff_hi.is_sign_positive() {
            // The difference is linear on this segment; interpolate the root.
            // The ratio stays in (0, 1], which keeps the arithmetic in range
            // even on a segment that ends at a saturated flat threshold.
            let ratio = diff_lo / (diff_lo - diff_hi);
            return Some(lo + (hi - lo) * ratio);
        }
    }

    if diff(ceiling).is_zero() {
        return Some(ceiling);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ppo() -> Plan {
        Plan {
            name: "Premium PPO".to_string(),
            monthly_premium: dec("292.90"),
            annual_employer_contribution: dec("600"),
            deductible: dec("2000"),
            out_of_pocket_max: dec("6500"),
            coinsurance_rate: dec("0.10"),
            ..Plan::default()
        }
    }

    fn hdhp() -> Plan {
        Plan {
            name: "HDHP with HSA".to_string(),
            monthly_premium: dec("133.21"),
            annual_employer_contribution: dec("300"),
            deductible: dec("4000"),
            out_of_pocket_max: dec("8000"),
            coinsurance_rate: dec("0.10"),
            ..Plan::default()
        }
    }

    #[test]
    fn test_breakeven_for_crossing_curves() {
        // The premium gap is 1616.28 in the HDHP's favor; between the two
        // deductibles the PPO claws it back at 90 cents per dollar of spend,
        // so the curves cross at 3416.28 / 0.9 = 3795.87.
        let spend = find_breakeven(&ppo(), &hdhp()).expect("curves cross");
        assert!(spend > dec("3795") && spend < dec("3797"), "got {spend}");

        let gap = (total_cost_at_spend(&ppo(), spend) - total_cost_at_spend(&hdhp(), spend)).abs();
        assert!(gap <= BREAKEVEN_TOLERANCE, "gap {gap} exceeds tolerance");
    }

    #[test]
    fn test_breakeven_finds_first_crossing() {
        // These curves cross a second time near 45837, where the HDHP's
        // out-of-pocket cap flattens its curve while the PPO keeps climbing.
        // The search must report the lower crossing.
        let spend = find_breakeven(&ppo(), &hdhp()).unwrap();
        assert!(spend < dec("5000"), "got later crossing {spend}");
    }

    #[test]
    fn test_breakeven_is_symmetric() {
        let forward = find_breakeven(&ppo(), &hdhp()).unwrap();
        let reverse = find_breakeven(&hdhp(), &ppo()).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_no_breakeven_when_one_plan_dominates() {
        // Same cost-sharing, strictly higher premium: never breaks even.
        let expensive = Plan {
            monthly_premium: dec("500"),
            ..hdhp()
        };
        assert_eq!(find_breakeven(&expensive, &hdhp()), None);
    }

    #[test]
    fn test_identical_plans_break_even_immediately() {
        assert_eq!(find_breakeven(&ppo(), &ppo()), Some(Decimal::ZERO));
    }

    #[test]
    fn test_no_breakeven_when_curves_stay_close_but_never_meet() {
        // Same cost-sharing, annual premiums 90 cents apart: the curves run
        // within the tolerance everywhere but never actually cross.
        let slightly_pricier = Plan {
            monthly_premium: dec("133.285"),
            ..hdhp()
        };
        assert_eq!(find_breakeven(&slightly_pricier, &hdhp()), None);
    }

    #[test]
    fn test_extreme_coinsurance_rate_does_not_break_the_search() {
        // The smallest representable rate passes validation and saturates the
        // plan's flat threshold; the search must still terminate cleanly.
        let trickle = Plan {
            name: "Trickle".to_string(),
            monthly_premium: dec("50"),
            deductible: dec("1000"),
            out_of_pocket_max: dec("9000"),
            coinsurance_rate: Decimal::new(1, 28),
            ..Plan::default()
        };
        assert!(trickle.validate().is_ok());

        // The PPO is pricier than the trickle plan at every spend level.
        assert_eq!(find_breakeven(&ppo(), &trickle), None);
        assert_eq!(find_breakeven(&trickle, &ppo()), None);
    }
}
