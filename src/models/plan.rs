//! Health-insurance plan model and related types.
//!
//! A [`Plan`] holds the complete parameter set for one insurance product:
//! premium, deductible, out-of-pocket maximum, coinsurance rate, the copay
//! table, and HSA settings. Plans are populated from configuration, checked
//! once with [`Plan::validate`], and read-only thereafter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// The kind of insurance product. Informational only; calculations branch on
/// the plan's parameters (notably `hsa_eligible`), never on the plan type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Preferred Provider Organization.
    Ppo,
    /// High Deductible Health Plan (usually paired with an HSA).
    Hdhp,
    /// Health Maintenance Organization.
    Hmo,
    /// Any other product type.
    Other,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanType::Ppo => "PPO",
            PlanType::Hdhp => "HDHP",
            PlanType::Hmo => "HMO",
            PlanType::Other => "Other",
        };
        write!(f, "{label}")
    }
}

/// A service category that a plan may cover with a fixed copay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopayCategory {
    /// Primary care office visits.
    PrimaryCare,
    /// Specialist office visits.
    Specialist,
    /// Urgent care visits.
    UrgentCare,
    /// Emergency room visits.
    EmergencyRoom,
    /// Generic prescription fills.
    GenericDrug,
    /// Brand-name prescription fills.
    BrandDrug,
}

impl CopayCategory {
    /// The stable snake_case label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            CopayCategory::PrimaryCare => "primary_care",
            CopayCategory::Specialist => "specialist",
            CopayCategory::UrgentCare => "urgent_care",
            CopayCategory::EmergencyRoom => "emergency_room",
            CopayCategory::GenericDrug => "generic_drug",
            CopayCategory::BrandDrug => "brand_drug",
        }
    }
}

fn default_hsa_limit() -> Decimal {
    // 2025 IRS family limit.
    Decimal::from(8550)
}

/// A health-insurance plan.
///
/// # Example
///
/// ```
/// use healthplan_engine::models::{Plan, PlanType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let plan = Plan {
///     name: "Premium PPO".to_string(),
///     plan_type: PlanType::Ppo,
///     monthly_premium: Decimal::from_str("292.90").unwrap(),
///     annual_employer_contribution: Decimal::from(600),
///     deductible: Decimal::from(2000),
///     out_of_pocket_max: Decimal::from(6500),
///     coinsurance_rate: Decimal::from_str("0.10").unwrap(),
///     ..Plan::default()
/// };
///
/// plan.validate().unwrap();
/// assert_eq!(plan.annual_premium_cost(), Decimal::from_str("2914.80").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Display name for the plan.
    pub name: String,
    /// The kind of product (PPO, HDHP, ...).
    pub plan_type: PlanType,
    /// Monthly premium before any employer contribution.
    pub monthly_premium: Decimal,
    /// Annual lump sum the employer puts toward the premium.
    #[serde(default)]
    pub annual_employer_contribution: Decimal,
    /// Annual deductible: cost-shared spend is member-paid in full below this.
    pub deductible: Decimal,
    /// Annual cap on total member cost-sharing (copays + deductible +
    /// coinsurance).
    pub out_of_pocket_max: Decimal,
    /// Fraction of cost-shared spend the member pays after meeting the
    /// deductible, in `[0, 1]`.
    pub coinsurance_rate: Decimal,
    /// Fixed per-event charges by category. Categories absent from the map
    /// (or set to zero) are cost-shared instead.
    #[serde(default)]
    pub copays: HashMap<CopayCategory, Decimal>,
    /// Whether the plan qualifies for a Health Savings Account.
    #[serde(default)]
    pub hsa_eligible: bool,
    /// Annual employer HSA contribution. Meaningful only when `hsa_eligible`.
    #[serde(default)]
    pub employer_hsa_contribution: Decimal,
    /// Ceiling on combined employer + employee HSA contributions for the year.
    #[serde(default = "default_hsa_limit")]
    pub current_year_hsa_limit: Decimal,
    /// Whether HSA funds are drawn down for current-year expenses. Only
    /// `false` is supported: the HSA is modelled purely as an investment
    /// balance.
    #[serde(default)]
    pub use_hsa_for_expenses: bool,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            name: String::new(),
            plan_type: PlanType::Ppo,
            monthly_premium: Decimal::ZERO,
            annual_employer_contribution: Decimal::ZERO,
            deductible: Decimal::ZERO,
            out_of_pocket_max: Decimal::ZERO,
            coinsurance_rate: Decimal::ZERO,
            copays: HashMap::new(),
            hsa_eligible: false,
            employer_hsa_contribution: Decimal::ZERO,
            current_year_hsa_limit: default_hsa_limit(),
            use_hsa_for_expenses: false,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.plan_type)
    }
}

impl Plan {
    /// Returns the copay for a category, or zero when the category has no
    /// copay configured.
    pub fn copay(&self, category: CopayCategory) -> Decimal {
        self.copays.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Annual premium cost net of the employer contribution.
    ///
    /// May be negative when the employer contribution exceeds the premium;
    /// that represents a net subsidy and is allowed.
    pub fn annual_premium_cost(&self) -> Decimal {
        self.monthly_premium * Decimal::from(12) - self.annual_employer_contribution
    }

    /// The employee HSA contribution, assuming the household maxes out the
    /// annual limit. Zero for HSA-ineligible plans, and clamped at zero when
    /// the employer contribution alone reaches the limit.
    pub fn employee_hsa_contribution(&self) -> Decimal {
        if !self.hsa_eligible {
            return Decimal::ZERO;
        }
        (self.current_year_hsa_limit - self.employer_hsa_contribution).max(Decimal::ZERO)
    }

    /// Combined employer + employee HSA contributions for the year.
    pub fn total_hsa_contributions(&self) -> Decimal {
        if !self.hsa_eligible {
            return Decimal::ZERO;
        }
        self.current_year_hsa_limit
    }

    /// HSA balance at the end of the year. Equal to total contributions,
    /// since HSA funds are never drawn down for current expenses.
    pub fn hsa_balance_end_of_year(&self) -> Decimal {
        self.total_hsa_contributions()
    }

    /// Validates the plan parameters.
    ///
    /// Rejects negative amounts, a coinsurance rate outside `[0, 1]`, a
    /// deductible above the out-of-pocket maximum, and the unsupported
    /// `use_hsa_for_expenses` mode. A plan that passes validation can be fed
    /// to every calculation in this crate without further errors.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return self.invalid("name must not be empty");
        }
        if self.monthly_premium < Decimal::ZERO {
            return self.invalid("monthly_premium must not be negative");
        }
        if self.annual_employer_contribution < Decimal::ZERO {
            return self.invalid("annual_employer_contribution must not be negative");
        }
        if self.deductible < Decimal::ZERO {
            return self.invalid("deductible must not be negative");
        }
        if self.out_of_pocket_max < Decimal::ZERO {
            return self.invalid("out_of_pocket_max must not be negative");
        }
        if self.deductible > self.out_of_pocket_max {
            return self.invalid("deductible must not exceed out_of_pocket_max");
        }
        if self.coinsurance_rate < Decimal::ZERO || self.coinsurance_rate > Decimal::ONE {
            return self.invalid("coinsurance_rate must be between 0 and 1");
        }
        for (category, amount) in &self.copays {
            if *amount < Decimal::ZERO {
                return self.invalid(&format!(
                    "copay for {} must not be negative",
                    category.label()
                ));
            }
        }
        if self.employer_hsa_contribution < Decimal::ZERO {
            return self.invalid("employer_hsa_contribution must not be negative");
        }
        if self.current_year_hsa_limit < Decimal::ZERO {
            return self.invalid("current_year_hsa_limit must not be negative");
        }
        if self.use_hsa_for_expenses {
            return self.invalid("use_hsa_for_expenses is not supported; the HSA is modelled as an investment balance only");
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineResult<()> {
        Err(EngineError::InvalidPlan {
            plan: self.name.clone(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ppo_plan() -> Plan {
        let mut copays = HashMap::new();
        copays.insert(CopayCategory::PrimaryCare, dec("25"));
        copays.insert(CopayCategory::Specialist, dec("45"));
        copays.insert(CopayCategory::UrgentCare, dec("25"));
        copays.insert(CopayCategory::EmergencyRoom, dec("300"));
        copays.insert(CopayCategory::GenericDrug, dec("10"));
        copays.insert(CopayCategory::BrandDrug, dec("30"));

        Plan {
            name: "Premium PPO".to_string(),
            plan_type: PlanType::Ppo,
            monthly_premium: dec("292.90"),
            annual_employer_contribution: dec("600"),
            deductible: dec("2000"),
            out_of_pocket_max: dec("6500"),
            coinsurance_rate: dec("0.10"),
            copays,
            ..Plan::default()
        }
    }

    fn hdhp_plan() -> Plan {
        Plan {
            name: "HDHP with HSA".to_string(),
            plan_type: PlanType::Hdhp,
            monthly_premium: dec("133.21"),
            annual_employer_contribution: dec("300"),
            deductible: dec("4000"),
            out_of_pocket_max: dec("8000"),
            coinsurance_rate: dec("0.10"),
            hsa_eligible: true,
            employer_hsa_contribution: dec("1200"),
            ..Plan::default()
        }
    }

    #[test]
    fn test_annual_premium_cost_nets_out_employer_contribution() {
        assert_eq!(ppo_plan().annual_premium_cost(), dec("2914.80"));
        assert_eq!(hdhp_plan().annual_premium_cost(), dec("1298.52"));
    }

    #[test]
    fn test_annual_premium_cost_may_be_negative() {
        let plan = Plan {
            monthly_premium: dec("10"),
            annual_employer_contribution: dec("500"),
            ..ppo_plan()
        };
        assert_eq!(plan.annual_premium_cost(), dec("-380"));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_hsa_values_are_zero_when_ineligible() {
        let plan = ppo_plan();
        assert_eq!(plan.employee_hsa_contribution(), Decimal::ZERO);
        assert_eq!(plan.total_hsa_contributions(), Decimal::ZERO);
        assert_eq!(plan.hsa_balance_end_of_year(), Decimal::ZERO);
    }

    #[test]
    fn test_employee_hsa_contribution_fills_to_limit() {
        let plan = hdhp_plan();
        assert_eq!(plan.employee_hsa_contribution(), dec("7350"));
        assert_eq!(plan.total_hsa_contributions(), dec("8550"));
        assert_eq!(plan.hsa_balance_end_of_year(), dec("8550"));
    }

    #[test]
    fn test_employee_hsa_contribution_clamps_at_zero() {
        let plan = Plan {
            employer_hsa_contribution: dec("9000"),
            ..hdhp_plan()
        };
        assert_eq!(plan.employee_hsa_contribution(), Decimal::ZERO);
    }

    #[test]
    fn test_copay_defaults_to_zero_for_missing_category() {
        let plan = hdhp_plan();
        assert_eq!(plan.copay(CopayCategory::PrimaryCare), Decimal::ZERO);

        let ppo = ppo_plan();
        assert_eq!(ppo.copay(CopayCategory::EmergencyRoom), dec("300"));
    }

    #[test]
    fn test_validate_accepts_well_formed_plans() {
        assert!(ppo_plan().validate().is_ok());
        assert!(hdhp_plan().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_premium() {
        let plan = Plan {
            monthly_premium: dec("-1"),
            ..ppo_plan()
        };
        assert_invalid(&plan, "monthly_premium");
    }

    #[test]
    fn test_validate_rejects_coinsurance_above_one() {
        let plan = Plan {
            coinsurance_rate: dec("1.5"),
            ..ppo_plan()
        };
        assert_invalid(&plan, "coinsurance_rate");
    }

    #[test]
    fn test_validate_rejects_negative_coinsurance() {
        let plan = Plan {
            coinsurance_rate: dec("-0.1"),
            ..ppo_plan()
        };
        assert_invalid(&plan, "coinsurance_rate");
    }

    #[test]
    fn test_validate_rejects_deductible_above_oop_max() {
        let plan = Plan {
            deductible: dec("7000"),
            out_of_pocket_max: dec("6500"),
            ..ppo_plan()
        };
        assert_invalid(&plan, "deductible");
    }

    #[test]
    fn test_validate_rejects_negative_copay() {
        let mut plan = ppo_plan();
        plan.copays.insert(CopayCategory::Specialist, dec("-5"));
        assert_invalid(&plan, "copay");
    }

    #[test]
    fn test_validate_rejects_hsa_drawdown_mode() {
        let plan = Plan {
            use_hsa_for_expenses: true,
            ..hdhp_plan()
        };
        assert_invalid(&plan, "use_hsa_for_expenses");
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let plan = Plan {
            name: "  ".to_string(),
            ..ppo_plan()
        };
        assert_invalid(&plan, "name");
    }

    #[test]
    fn test_plan_round_trips_through_json() {
        let plan = ppo_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }

    #[test]
    fn test_display_includes_name_and_type() {
        assert_eq!(ppo_plan().to_string(), "Premium PPO (PPO)");
        assert_eq!(hdhp_plan().to_string(), "HDHP with HSA (HDHP)");
    }

    fn assert_invalid(plan: &Plan, expected_fragment: &str) {
        match plan.validate() {
            Err(EngineError::InvalidPlan { message, .. }) => {
                assert!(
                    message.contains(expected_fragment),
                    "message '{message}' does not mention '{expected_fragment}'"
                );
            }
            other => panic!("Expected InvalidPlan error, got {other:?}"),
        }
    }
}
