//! JSON export of comparison reports.
//!
//! A saved report embeds the plan and scenario definitions alongside the
//! computed results, so it round-trips losslessly and can be re-read without
//! the original configuration directory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::ComparisonReport;

/// Saves a comparison report as pretty-printed JSON.
pub fn save_report<P: AsRef<Path>>(path: P, report: &ComparisonReport) -> EngineResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let json =
        serde_json::to_string_pretty(report).map_err(|e| EngineError::ReportIoError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    fs::write(path, json).map_err(|e| EngineError::ReportIoError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    info!(path = %path_str, "Saved comparison report");
    Ok(())
}

/// Loads a previously saved comparison report.
pub fn load_report<P: AsRef<Path>>(path: P) -> EngineResult<ComparisonReport> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| EngineError::ReportIoError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| EngineError::ReportIoError {
        path: path_str,
        message: e.to_string(),
    })
}
