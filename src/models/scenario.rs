//! Usage scenario model.
//!
//! A [`UsageScenario`] captures one hypothetical year of medical utilization:
//! how many visits, prescription fills and tests the household expects.
//! Counts are unsigned, so negative utilization is unrepresentable by
//! construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::models::plan::CopayCategory;
use crate::models::pricing::{PriceList, Service};

/// A category of medical visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitCategory {
    /// Primary care office visits.
    PrimaryCare,
    /// Specialist office visits.
    Specialist,
    /// Urgent care visits.
    UrgentCare,
    /// Emergency room visits.
    EmergencyRoom,
    /// Preventive care visits.
    PreventiveCare,
}

impl VisitCategory {
    /// All visit categories.
    pub const ALL: [VisitCategory; 5] = [
        VisitCategory::PrimaryCare,
        VisitCategory::Specialist,
        VisitCategory::UrgentCare,
        VisitCategory::EmergencyRoom,
        VisitCategory::PreventiveCare,
    ];

    /// The billable service this visit category maps to.
    pub fn service(&self) -> Service {
        match self {
            VisitCategory::PrimaryCare => Service::PrimaryCare,
            VisitCategory::Specialist => Service::Specialist,
            VisitCategory::UrgentCare => Service::UrgentCare,
            VisitCategory::EmergencyRoom => Service::EmergencyRoom,
            VisitCategory::PreventiveCare => Service::PreventiveCare,
        }
    }

    /// The copay category a plan could cover this visit under. Preventive
    /// care has no copay category; it is always cost-shared.
    pub fn copay_category(&self) -> Option<CopayCategory> {
        match self {
            VisitCategory::PrimaryCare => Some(CopayCategory::PrimaryCare),
            VisitCategory::Specialist => Some(CopayCategory::Specialist),
            VisitCategory::UrgentCare => Some(CopayCategory::UrgentCare),
            VisitCategory::EmergencyRoom => Some(CopayCategory::EmergencyRoom),
            VisitCategory::PreventiveCare => None,
        }
    }
}

/// A prescription drug tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugTier {
    /// Generic drugs.
    Generic,
    /// Brand-name drugs.
    Brand,
}

impl DrugTier {
    /// All drug tiers.
    pub const ALL: [DrugTier; 2] = [DrugTier::Generic, DrugTier::Brand];

    /// The billable service for one fill at this tier.
    pub fn service(&self) -> Service {
        match self {
            DrugTier::Generic => Service::GenericDrug,
            DrugTier::Brand => Service::BrandDrug,
        }
    }

    /// The copay category a plan could cover this tier under.
    pub fn copay_category(&self) -> CopayCategory {
        match self {
            DrugTier::Generic => CopayCategory::GenericDrug,
            DrugTier::Brand => CopayCategory::BrandDrug,
        }
    }
}

/// A category of test or procedure. Tests never carry a copay; they are
/// always cost-shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// Blood tests and other lab work.
    LabWork,
    /// X-rays, MRI and other imaging.
    Imaging,
    /// Minor procedures.
    Procedures,
}

impl TestCategory {
    /// All test categories.
    pub const ALL: [TestCategory; 3] = [
        TestCategory::LabWork,
        TestCategory::Imaging,
        TestCategory::Procedures,
    ];

    /// The billable service this test category maps to.
    pub fn service(&self) -> Service {
        match self {
            TestCategory::LabWork => Service::LabWork,
            TestCategory::Imaging => Service::Imaging,
            TestCategory::Procedures => Service::Procedures,
        }
    }
}

/// Expected medical utilization for one year.
///
/// Categories absent from a map count as zero, so a scenario only needs to
/// list the utilization it actually has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageScenario {
    /// Name of the scenario (e.g. "Healthy Year").
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: String,
    /// Visit counts by category.
    #[serde(default)]
    pub visits: HashMap<VisitCategory, u32>,
    /// Prescription fill counts by drug tier.
    #[serde(default)]
    pub prescriptions: HashMap<DrugTier, u32>,
    /// Test and procedure counts by category.
    #[serde(default)]
    pub tests: HashMap<TestCategory, u32>,
}

impl fmt::Display for UsageScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.description)
        }
    }
}

impl UsageScenario {
    /// Returns the visit count for a category (zero when absent).
    pub fn visit_count(&self, category: VisitCategory) -> u32 {
        self.visits.get(&category).copied().unwrap_or(0)
    }

    /// Returns the fill count for a drug tier (zero when absent).
    pub fn fill_count(&self, tier: DrugTier) -> u32 {
        self.prescriptions.get(&tier).copied().unwrap_or(0)
    }

    /// Returns the test count for a category (zero when absent).
    pub fn test_count(&self, category: TestCategory) -> u32 {
        self.tests.get(&category).copied().unwrap_or(0)
    }

    /// Total number of medical visits across all categories.
    pub fn total_visits(&self) -> u32 {
        VisitCategory::ALL
            .iter()
            .map(|c| self.visit_count(*c))
            .sum()
    }

    /// Total cost of the year's utilization at typical provider charges,
    /// before any insurance cost-sharing.
    ///
    /// Unpriced services contribute zero.
    pub fn total_medical_cost_before_insurance(&self, prices: &PriceList) -> Decimal {
        let mut total = Decimal::ZERO;

        for category in VisitCategory::ALL {
            total += Decimal::from(self.visit_count(category)) * prices.charge(category.service());
        }
        for tier in DrugTier::ALL {
            total += Decimal::from(self.fill_count(tier)) * prices.charge(tier.service());
        }
        for category in TestCategory::ALL {
            total += Decimal::from(self.test_count(category)) * prices.charge(category.service());
        }

        total
    }

    /// Validates the scenario.
    ///
    /// Counts are unsigned so there is little to reject; only a blank name is
    /// an error.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidScenario {
                scenario: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
