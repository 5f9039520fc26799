//! Comparison and reporting layer.
//!
//! This module consumes the core calculations: it evaluates every plan ×
//! scenario pair, runs the breakeven search for every plan pair, and turns
//! an expected spend level into a recommendation. It is a consumer of the
//! calculation layer, not part of it.

mod export;

pub use export::{load_report, save_report};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{calculate_annual_cost, find_breakeven, total_cost_at_spend};
use crate::error::{EngineError, EngineResult};
use crate::models::{AnnualCost, Plan, PriceList, UsageScenario};

/// The breakeven spend level for one pair of plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenEntry {
    /// First plan of the pair.
    pub plan_a: String,
    /// Second plan of the pair.
    pub plan_b: String,
    /// The pre-insurance spend at which the two plans cost the same, or
    /// `None` when one plan is cheaper at every spend level.
    pub breakeven_spend: Option<Decimal>,
}

/// A plan's total annual cost at a given spend level, used when ranking
/// plans for a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTotal {
    /// The plan name.
    pub plan: String,
    /// Total annual cost at the expected spend level.
    pub total_cost: Decimal,
}

/// The cheapest plan for an expected level of medical spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The expected pre-insurance medical spend the recommendation is for.
    pub expected_spend: Decimal,
    /// Name of the cheapest plan at that spend level.
    pub recommended_plan: String,
    /// Every plan's total at that spend level, cheapest first.
    pub totals: Vec<PlanTotal>,
}

/// A full comparison of every plan against every scenario.
///
/// The report embeds the plan and scenario definitions it was computed from,
/// so a saved report round-trips losslessly and is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Unique id for this report.
    pub id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The plans that were compared.
    pub plans: Vec<Plan>,
    /// The scenarios they were compared against.
    pub scenarios: Vec<UsageScenario>,
    /// The shared price list used for typical charges.
    pub typical_costs: PriceList,
    /// One annual cost per plan × scenario pair, scenario-major.
    pub results: Vec<AnnualCost>,
    /// One breakeven entry per unordered plan pair.
    pub breakevens: Vec<BreakevenEntry>,
}

impl ComparisonReport {
    /// Looks up the result for a plan × scenario pair.
    pub fn result_for(&self, plan: &str, scenario: &str) -> Option<&AnnualCost> {
        self.results
            .iter()
            .find(|r| r.plan_name == plan && r.scenario_name == scenario)
    }
}

/// Compares every plan against every scenario.
///
/// Inputs are validated up front (via
/// [`calculate_annual_cost`]); at least one plan and one scenario are
/// required.
pub fn compare(
    plans: &[Plan],
    scenarios: &[UsageScenario],
    prices: &PriceList,
) -> EngineResult<ComparisonReport> {
    if plans.is_empty() {
        return Err(EngineError::CalculationError {
            message: "no plans to compare".to_string(),
        });
    }
    if scenarios.is_empty() {
        return Err(EngineError::CalculationError {
            message: "no scenarios to compare against".to_string(),
        });
    }

    let mut results = Vec::with_capacity(plans.len() * scenarios.len());
    for scenario in scenarios {
        for plan in plans {
            results.push(calculate_annual_cost(plan, scenario, prices)?);
        }
    }

    let mut breakevens = Vec::new();
    for (index, plan_a) in plans.iter().enumerate() {
        for plan_b in &plans[index + 1..] {
            breakevens.push(BreakevenEntry {
                plan_a: plan_a.name.clone(),
                plan_b: plan_b.name.clone(),
                breakeven_spend: find_breakeven(plan_a, plan_b),
            });
        }
    }

    Ok(ComparisonReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        plans: plans.to_vec(),
        scenarios: scenarios.to_vec(),
        typical_costs: prices.clone(),
        results,
        breakevens,
    })
}

/// Ranks the report's plans by total cost at an expected spend level and
/// recommends the cheapest.
pub fn recommend(report: &ComparisonReport, expected_spend: Decimal) -> EngineResult<Recommendation> {
    let mut totals: Vec<PlanTotal> = report
        .plans
        .iter()
        .map(|plan| PlanTotal {
            plan: plan.name.clone(),
            total_cost: total_cost_at_spend(plan, expected_spend),
        })
        .collect();
    totals.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));

    let recommended_plan = totals
        .first()
        .map(|t| t.plan.clone())
        .ok_or_else(|| EngineError::CalculationError {
            message: "no plans to recommend from".to_string(),
        })?;

    Ok(Recommendation {
        expected_spend,
        recommended_plan,
        totals,
    })
}
