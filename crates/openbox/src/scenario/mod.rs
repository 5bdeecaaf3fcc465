//! Scripted scenarios: a RON list of shell commands plus checks on the result

mod actions;
mod definition;
mod executor;
mod results;
mod verification;

pub use actions::ScenarioAction;
pub use definition::ScenarioDefinition;
pub use executor::{ScenarioExecutor, ScenarioExecutorConfig};
pub use results::ExecutionReport;
pub use verification::{Region, VerificationCondition, VerificationResult};
