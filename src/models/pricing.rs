//! The service catalogue and the shared reference price list.
//!
//! Every billable item a scenario can generate is identified by a [`Service`],
//! and the "typical cost" a provider would charge for it (before any insurance
//! discount or cost-sharing) lives in a single shared [`PriceList`]. The price
//! list is loaded once and passed by reference wherever it is needed; it is
//! never duplicated per scenario.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// A billable medical service or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// A primary care office visit.
    PrimaryCare,
    /// A specialist office visit.
    Specialist,
    /// An urgent care visit.
    UrgentCare,
    /// An emergency room visit.
    EmergencyRoom,
    /// A preventive care visit (annual physical and the like).
    PreventiveCare,
    /// Blood tests and other lab work.
    LabWork,
    /// X-rays, MRI and other imaging.
    Imaging,
    /// Minor procedures.
    Procedures,
    /// A generic prescription fill.
    GenericDrug,
    /// A brand-name prescription fill.
    BrandDrug,
}

impl Service {
    /// All services, in display order.
    pub const ALL: [Service; 10] = [
        Service::PrimaryCare,
        Service::Specialist,
        Service::UrgentCare,
        Service::EmergencyRoom,
        Service::PreventiveCare,
        Service::LabWork,
        Service::Imaging,
        Service::Procedures,
        Service::GenericDrug,
        Service::BrandDrug,
    ];

    /// The stable snake_case label for this service, matching its
    /// configuration-file key.
    pub fn label(&self) -> &'static str {
        match self {
            Service::PrimaryCare => "primary_care",
            Service::Specialist => "specialist",
            Service::UrgentCare => "urgent_care",
            Service::EmergencyRoom => "emergency_room",
            Service::PreventiveCare => "preventive_care",
            Service::LabWork => "lab_work",
            Service::Imaging => "imaging",
            Service::Procedures => "procedures",
            Service::GenericDrug => "generic_drug",
            Service::BrandDrug => "brand_drug",
        }
    }
}

/// The shared table of typical per-unit charges.
///
/// Services missing from the table price at zero rather than failing; an
/// incomplete table is a deliberate way of saying "this item is free", not
/// an error.
///
/// # Example
///
/// ```
/// use healthplan_engine::models::{PriceList, Service};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let mut prices = HashMap::new();
/// prices.insert(Service::PrimaryCare, Decimal::from_str("150").unwrap());
/// let list = PriceList::new(prices);
///
/// assert_eq!(list.charge(Service::PrimaryCare), Decimal::from_str("150").unwrap());
/// assert_eq!(list.charge(Service::Imaging), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList {
    prices: HashMap<Service, Decimal>,
}

impl PriceList {
    /// Creates a price list from a map of typical charges.
    pub fn new(prices: HashMap<Service, Decimal>) -> Self {
        Self { prices }
    }

    /// Returns the typical charge for a service, or zero if the service is
    /// not priced.
    pub fn charge(&self, service: Service) -> Decimal {
        self.prices.get(&service).copied().unwrap_or(Decimal::ZERO)
    }

    /// Checks that no price is negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (service, price) in &self.prices {
            if price.is_sign_negative() && !price.is_zero() {
                return Err(EngineError::InvalidPrice {
                    service: service.label().to_string(),
                    message: format!("typical cost must not be negative, got {price}"),
                });
            }
        }
        Ok(())
    }
}
