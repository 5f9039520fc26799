//! Configuration types for the health plan cost engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML files in a household configuration directory.

use serde::Deserialize;

use crate::models::{Plan, PriceList, UsageScenario};

/// Plans configuration file structure (`plans.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// The plans on offer to the household.
    pub plans: Vec<Plan>,
}

/// Scenarios configuration file structure (`scenarios.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScenariosConfig {
    /// The usage scenarios to evaluate every plan against.
    pub scenarios: Vec<UsageScenario>,
}

/// Prices configuration file structure (`prices.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PricesConfig {
    /// Typical provider charges per service, shared by every scenario.
    pub typical_costs: PriceList,
}

/// The complete household configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct HouseholdConfig {
    plans: Vec<Plan>,
    scenarios: Vec<UsageScenario>,
    prices: PriceList,
}

impl HouseholdConfig {
    /// Creates a new HouseholdConfig from its component parts.
    pub fn new(plans: Vec<Plan>, scenarios: Vec<UsageScenario>, prices: PriceList) -> Self {
        Self {
            plans,
            scenarios,
            prices,
        }
    }

    /// Returns the plans on offer.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Returns the usage scenarios.
    pub fn scenarios(&self) -> &[UsageScenario] {
        &self.scenarios
    }

    /// Returns the shared price list.
    pub fn prices(&self) -> &PriceList {
        &self.prices
    }
}
