//! Error types for the health plan cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating plans and scenarios, and producing comparison reports.

use thiserror::Error;

/// The main error type for the health plan cost engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use healthplan_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/plans.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plans.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A plan contained out-of-range or inconsistent parameters.
    #[error("Invalid plan '{plan}': {message}")]
    InvalidPlan {
        /// The name of the invalid plan.
        plan: String,
        /// A description of what made the plan invalid.
        message: String,
    },

    /// A usage scenario contained inconsistent data.
    #[error("Invalid scenario '{scenario}': {message}")]
    InvalidScenario {
        /// The name of the invalid scenario.
        scenario: String,
        /// A description of what made the scenario invalid.
        message: String,
    },

    /// The price list contained an out-of-range entry.
    #[error("Invalid price for '{service}': {message}")]
    InvalidPrice {
        /// The service whose price was invalid.
        service: String,
        /// A description of what made the price invalid.
        message: String,
    },

    /// A plan name was not found in the loaded configuration.
    #[error("Plan not found: {name}")]
    PlanNotFound {
        /// The plan name that was not found.
        name: String,
    },

    /// A scenario name was not found in the loaded configuration.
    #[error("Scenario not found: {name}")]
    ScenarioNotFound {
        /// The scenario name that was not found.
        name: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A comparison report could not be written to or read from disk.
    #[error("Failed to read or write report '{path}': {message}")]
    ReportIoError {
        /// The path of the report file.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/plans.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/plans.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_plan_displays_name_and_message() {
        let error = EngineError::InvalidPlan {
            plan: "Premium PPO".to_string(),
            message: "coinsurance_rate must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid plan 'Premium PPO': coinsurance_rate must be between 0 and 1"
        );
    }

    #[test]
    fn test_invalid_scenario_displays_name_and_message() {
        let error = EngineError::InvalidScenario {
            scenario: "Healthy Year".to_string(),
            message: "name must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid scenario 'Healthy Year': name must not be empty"
        );
    }

    #[test]
    fn test_plan_not_found_displays_name() {
        let error = EngineError::PlanNotFound {
            name: "unknown".to_string(),
        };
        assert_eq!(error.to_string(), "Plan not found: unknown");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "no plans to compare".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: no plans to compare");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_plan_not_found() -> EngineResult<()> {
            Err(EngineError::PlanNotFound {
                name: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_plan_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
