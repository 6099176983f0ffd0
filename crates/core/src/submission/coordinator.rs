//! Submission collaborator trait and the simulated gateway.

use std::future::Future;
use std::time::Duration;

use docflow_shared::{GatewayOutcome, GatewaySettings};
use tracing::debug;

use super::error::SubmissionError;
use super::types::SubmissionReceipt;
use crate::summary::ReviewSummary;

/// External finalize operation (payment, dispatch, ...).
///
/// One call is one request with one outcome. Implementations do not retry;
/// retrying is the caller's decision.
pub trait SubmissionCoordinator: Send + Sync {
    /// Submits the reviewed order.
    fn submit(
        &self,
        summary: &ReviewSummary,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Stand-in gateway that resolves after a fixed latency with a fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    outcome: GatewayOutcome,
    success_message: String,
    failure_message: String,
}

impl SimulatedGateway {
    /// Creates a gateway from configuration.
    #[must_use]
    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self {
            latency: Duration::from_millis(settings.latency_ms),
            outcome: settings.outcome,
            success_message: settings.success_message.clone(),
            failure_message: settings.failure_message.clone(),
        }
    }

    /// Overrides the latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Overrides the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: GatewayOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::from_settings(&GatewaySettings::default())
    }
}

impl SubmissionCoordinator for SimulatedGateway {
    async fn submit(&self, summary: &ReviewSummary) -> Result<SubmissionReceipt, SubmissionError> {
        debug!(
            latency_ms = self.latency.as_millis(),
            tier = summary.tier.as_ref().map(|t| t.title.as_str()),
            "simulated gateway processing"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.outcome {
            GatewayOutcome::Succeed => Ok(SubmissionReceipt::new(self.success_message.clone())),
            GatewayOutcome::Fail => Err(SubmissionError::Declined(self.failure_message.clone())),
        }
    }
}
