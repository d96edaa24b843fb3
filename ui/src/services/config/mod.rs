use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::services::errors::{ContactError, ContactResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub submission: SubmissionConfig,
    pub notification: NotificationConfig,
    pub button: ButtonConfig,
}

/// Simulated submission behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Fixed delay before the simulated submission settles
    pub delay_ms: u64,
    /// Probability of a successful outcome, in [0.0, 1.0]
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u64,
    pub validation_failed_message: String,
    pub sent_message: String,
    pub send_failed_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub idle_label: String,
    pub busy_label: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,    // 1.5 seconds, stands in for network latency
            success_rate: 0.9, // 90% of simulated submissions succeed
        }
    }
}

impl SubmissionConfig {
    /// Settles immediately with a fixed outcome, for deterministic runs
    pub fn instant(success: bool) -> Self {
        Self {
            delay_ms: 0,
            success_rate: if success { 1.0 } else { 0.0 },
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
            validation_failed_message: "Please correct the errors in the form.".to_string(),
            sent_message: "Message sent successfully! We will get in touch soon.".to_string(),
            send_failed_message: "Error sending message. Please try again.".to_string(),
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            idle_label: "Send Message".to_string(),
            busy_label: "Sending...".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactConfig {
    pub fn new() -> Self {
        Self {
            submission: SubmissionConfig::default(),
            notification: NotificationConfig::default(),
            button: ButtonConfig::default(),
        }
    }

    pub fn validate(&self) -> ContactResult<()> {
        if !(0.0..=1.0).contains(&self.submission.success_rate) {
            return Err(ContactError::Configuration {
                field: "submission.success_rate".to_string(),
                value: self.submission.success_rate.to_string(),
            });
        }

        if self.notification.dismiss_after_ms == 0 {
            return Err(ContactError::Configuration {
                field: "notification.dismiss_after_ms".to_string(),
                value: "0".to_string(),
            });
        }

        if self.button.idle_label.trim().is_empty() {
            return Err(ContactError::Configuration {
                field: "button.idle_label".to_string(),
                value: self.button.idle_label.clone(),
            });
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<ContactConfig> = OnceLock::new();

/// Install the page's configuration. Must run before the first
/// `get_global_config` call; an invalid config is rejected and the defaults
/// stay in effect.
pub fn init_global_config(config: ContactConfig) -> ContactResult<()> {
    install(&GLOBAL_CONFIG, config)
}

/// Get the global configuration, or the defaults if none was installed
pub fn get_global_config() -> ContactConfig {
    GLOBAL_CONFIG.get_or_init(ContactConfig::new).clone()
}

fn install(slot: &OnceLock<ContactConfig>, config: ContactConfig) -> ContactResult<()> {
    if let Err(e) = config.validate() {
        warn!("Rejected contact configuration: {}", e);
        return Err(e);
    }

    slot.set(config).map_err(|_| ContactError::Configuration {
        field: "global".to_string(),
        value: "already initialized".to_string(),
    })?;
    info!("Contact configuration installed");
    Ok(())
}
