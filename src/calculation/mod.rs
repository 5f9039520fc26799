//! Calculation logic for the health plan cost engine.
//!
//! This module contains all the calculation functions for determining what a
//! plan costs under a usage scenario: net premium, HSA position, the
//! copay/deductible/coinsurance cost-sharing calculation, the total annual
//! cost orchestrator, the spend-level cost curve, and the breakeven search
//! between two plans.

mod annual_cost;
mod breakeven;
mod cost_sharing;
mod hsa;
mod premium;
mod spend_curve;

pub use annual_cost::calculate_annual_cost;
pub use breakeven::{BREAKEVEN_TOLERANCE, find_breakeven};
pub use cost_sharing::calculate_cost_sharing;
pub use hsa::calculate_hsa_position;
pub use premium::calculate_net_premium;
pub use spend_curve::{flat_spend_threshold, member_cost_at_spend, total_cost_at_spend};
