//! HSA contribution and balance calculation.
//!
//! The household's strategy is to max out the annual limit and never spend
//! the account, so the end-of-year balance simply equals the year's
//! contributions. Out-of-pocket medical spend is never reduced by HSA funds.

use rust_decimal::Decimal;

use crate::models::{HsaPosition, Plan};

/// Calculates the HSA position for a plan year.
///
/// For HSA-ineligible plans every figure is zero. For eligible plans the
/// employee contribution fills the gap between the employer contribution and
/// the annual limit, clamped at zero when the employer contribution alone
/// reaches the limit.
pub fn calculate_hsa_position(plan: &Plan) -> HsaPosition {
    if !plan.hsa_eligible {
        return HsaPosition {
            eligible: false,
            employer_contribution: Decimal::ZERO,
            employee_contribution: Decimal::ZERO,
            total_contributions: Decimal::ZERO,
            balance_end_of_year: Decimal::ZERO,
        };
    }

    let employee_contribution = plan.employee_hsa_contribution();
    let total_contributions = plan.total_hsa_contributions();

    HsaPosition {
        eligible: true,
        employer_contribution: plan.employer_hsa_contribution,
        employee_contribution,
        total_contributions,
        balance_end_of_year: plan.hsa_balance_end_of_year(),
    }
}
