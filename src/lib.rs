//! Health Plan Cost Engine
//!
//! This crate models health-insurance plans and hypothetical annual usage
//! scenarios, and calculates the member's total annual cost under each plan
//! (net premium + copays + deductible-phase + coinsurance-phase spending,
//! capped at the out-of-pocket maximum).

#![warn(missing_docs)]

pub mod calculation;
pub mod comparison;
pub mod config;
pub mod error;
pub mod models;
