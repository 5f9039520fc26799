//! Core data models for the health plan cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_breakdown;
mod plan;
mod pricing;
mod scenario;

pub use cost_breakdown::{
    AnnualCost, CostLine, CostSharing, CostSharingBreakdown, HsaPosition, NetPremium,
};
pub use plan::{CopayCategory, Plan, PlanType};
pub use pricing::{PriceList, Service};
pub use scenario::{DrugTier, TestCategory, UsageScenario, VisitCategory};
