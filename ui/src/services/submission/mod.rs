//! Contact form submission seam
//!
//! The workflow only depends on [`ContactSubmitter`]. [`SimulatedSubmitter`]
//! stands in for a real endpoint: it waits a fixed delay and then succeeds or
//! fails at random.

use async_trait::async_trait;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::features::contact::types::SubmissionRequest;
use crate::services::config::SubmissionConfig;
use crate::services::errors::{ContactError, ContactResult};
use crate::utils::platform::sleep_ms;

/// Anything that can deliver a validated contact request
#[async_trait(?Send)]
pub trait ContactSubmitter {
    /// Deliver the request; any `Err` is reported to the user as a failed send
    async fn submit(&self, request: SubmissionRequest) -> ContactResult<()>;

    /// Get the submitter name
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    config: SubmissionConfig,
}

impl SimulatedSubmitter {
    pub fn new(config: SubmissionConfig) -> Self {
        Self { config }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(SubmissionConfig::default())
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit(&self, request: SubmissionRequest) -> ContactResult<()> {
        sleep_ms(self.config.delay_ms).await;

        let draw: f64 = rand::thread_rng().gen();
        if draw < self.config.success_rate {
            let payload = serde_json::to_string(&request).unwrap_or_default();
            info!("Contact form submitted: {}", payload);
            Ok(())
        } else {
            warn!("Simulated network failure (draw {:.3})", draw);
            Err(ContactError::SubmissionFailed {
                reason: "Network failure".to_string(),
            })
        }
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::types::ContactFormValues;

    fn request() -> SubmissionRequest {
        SubmissionRequest::from_values(&ContactFormValues {
            name: "João".to_string(),
            email: "joao@example.com".to_string(),
            service: "consulting".to_string(),
            message: "I would like a quote please".to_string(),
        })
    }

    #[tokio::test]
    async fn test_always_succeeds_at_full_rate() {
        let submitter = SimulatedSubmitter::new(SubmissionConfig::instant(true));
        for _ in 0..20 {
            assert!(submitter.submit(request()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_always_fails_at_zero_rate() {
        let submitter = SimulatedSubmitter::new(SubmissionConfig::instant(false));
        let result = submitter.submit(request()).await;
        assert!(matches!(result, Err(ContactError::SubmissionFailed { .. })));
        assert_eq!(submitter.name(), "simulated");
    }
}
