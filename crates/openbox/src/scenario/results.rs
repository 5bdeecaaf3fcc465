//! Execution results and reporting

use serde::{Deserialize, Serialize};

use super::verification::VerificationResult;

/// Report from scenario execution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Scenario name
    pub scenario_name: String,

    /// Overall pass/fail status
    pub passed: bool,

    /// Simulation ticks run by the scenario
    pub ticks_executed: u64,

    /// Number of actions executed
    pub actions_executed: usize,

    /// Verification failures (empty if all passed)
    pub verification_failures: Vec<VerificationResult>,

    /// Execution log messages
    pub log: Vec<String>,

    /// Wall-clock time (milliseconds)
    pub duration_ms: f64,
}

impl ExecutionReport {
    /// Create new execution report
    pub fn new(scenario_name: String) -> Self {
        Self {
            scenario_name,
            ..Default::default()
        }
    }

    /// Check if all verifications passed
    pub fn success(&self) -> bool {
        self.verification_failures.is_empty()
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({} actions, {} ticks, {} failed checks, {:.1}ms)",
            self.scenario_name,
            if self.passed { "PASSED" } else { "FAILED" },
            self.actions_executed,
            self.ticks_executed,
            self.verification_failures.len(),
            self.duration_ms
        )
    }
}
