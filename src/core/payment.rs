use std::{future::Future, pin::Pin, time::Duration};

use crate::models::{Order, SubmissionStatus};

/// Delay of the simulated payment round-trip.
const SUBMISSION_DELAY: Duration = Duration::from_secs(3);

pub type SubmissionFuture = Pin<Box<dyn Future<Output = SubmissionStatus> + Send>>;

/// Source of booking outcomes. The returned future is owned so the UI
/// runtime can drive it to completion on its own; if the app closes
/// mid-flight the future is simply abandoned.
pub trait PaymentGateway {
    fn process(&self, order: Order) -> impl Future<Output = SubmissionStatus> + Send + 'static;
}

/// Fakes a payment provider: waits a fixed delay, then succeeds or
/// fails uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomGateway {
    delay: Duration,
}

impl RandomGateway {
    pub fn new() -> Self {
        Self {
            delay: SUBMISSION_DELAY,
        }
    }
}

impl Default for RandomGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for RandomGateway {
    fn process(&self, order: Order) -> impl Future<Output = SubmissionStatus> + Send + 'static {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            let status = if rand::random::<bool>() {
                SubmissionStatus::Success
            } else {
                SubmissionStatus::Failure
            };
            tracing::debug!(?status, bags = order.bags, "simulated payment resolved");
            status
        }
    }
}

/// Deterministic gateway for tests.
#[derive(Debug, Clone)]
pub struct FixedGateway {
    outcome: SubmissionStatus,
    delay: Duration,
}

impl FixedGateway {
    pub fn new(outcome: SubmissionStatus) -> Self {
        Self {
            outcome,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(outcome: SubmissionStatus, delay: Duration) -> Self {
        Self { outcome, delay }
    }
}

impl PaymentGateway for FixedGateway {
    fn process(&self, _order: Order) -> impl Future<Output = SubmissionStatus> + Send + 'static {
        let outcome = self.outcome;
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            outcome
        }
    }
}
