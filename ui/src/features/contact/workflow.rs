//! Submission workflow - coordinates validation, the submitter call and UI restoration
//!
//! The protocol is split in three so the async part never holds the state:
//! [`begin_submission`] validates and marks the button busy, [`run_submission`]
//! awaits the submitter, and [`finish_submission`] (reached through
//! `ContactAction::SubmissionFinished`) applies the outcome.

use tracing::{debug, error, info, warn};

use crate::features::contact::form_validation::validate_form;
use crate::features::contact::types::*;
use crate::services::config::ContactConfig;
use crate::services::errors::{ContactError, ErrorSeverity};
use crate::services::submission::ContactSubmitter;
use crate::utils::sleep_ms;

/// Validate the whole form and, if it passes, snapshot it and disable the button.
/// Returns `None` when validation failed; an error notification is shown in that case.
pub fn begin_submission(
    state: &mut ContactState,
    config: &ContactConfig,
) -> Option<SubmissionRequest> {
    if !validate_form(state) {
        info!("[Contact] Submission blocked by validation errors");
        state.show_notification(
            NotificationKind::Error,
            config.notification.validation_failed_message.clone(),
        );
        return None;
    }

    let request = SubmissionRequest::from_values(&state.values);

    // Keep the button as it was so every exit path can restore it
    if state.saved_button.is_none() {
        state.saved_button = Some(state.submit_button.clone());
    }
    state.submit_button = SubmitButton {
        disabled: true,
        label: config.button.busy_label.clone(),
    };

    info!("[Contact] Submission started at {}", request.timestamp);
    Some(request)
}

/// Await the submitter and fold any error into a failure outcome
pub async fn run_submission<S>(submitter: &S, request: SubmissionRequest) -> SubmissionOutcome
where
    S: ContactSubmitter + ?Sized,
{
    match submitter.submit(request).await {
        Ok(()) => SubmissionOutcome::Success,
        Err(e) => {
            log_submitter_error(submitter.name(), &e);
            SubmissionOutcome::Failure(failure_reason(&e))
        }
    }
}

/// Field errors belong inline in the form; a submitter returning one is
/// reported as a plain submission failure so no field message leaks into it.
fn failure_reason(e: &ContactError) -> String {
    match e.field() {
        Some(field) => format!("Submission rejected the {} field", field.id()),
        None => e.to_string(),
    }
}

fn log_submitter_error(submitter: &str, e: &ContactError) {
    if e.is_field_error() {
        warn!("[Contact] {} submitter returned a field error: {}", submitter, e);
        return;
    }

    match e.severity() {
        ErrorSeverity::High => error!("[Contact] {} submitter failed: {}", submitter, e),
        ErrorSeverity::Medium => warn!("[Contact] {} submitter failed: {}", submitter, e),
        ErrorSeverity::Low => debug!("[Contact] {} submitter failed: {}", submitter, e),
    }
}

/// Apply an outcome: restore the button, then notify and reset (on success only)
pub fn finish_submission(state: &mut ContactState, outcome: SubmissionOutcome) {
    finish_submission_with(state, outcome, &crate::services::config::get_global_config());
}

pub fn finish_submission_with(
    state: &mut ContactState,
    outcome: SubmissionOutcome,
    config: &ContactConfig,
) {
    if let Some(button) = state.saved_button.take() {
        state.submit_button = button;
    }

    match outcome {
        SubmissionOutcome::Success => {
            info!("[Contact] Submission succeeded");
            state.show_notification(
                NotificationKind::Success,
                config.notification.sent_message.clone(),
            );
            state.reset_form();
        }
        SubmissionOutcome::Failure(reason) => {
            warn!("[Contact] Submission failed: {}", reason);
            state.show_notification(
                NotificationKind::Error,
                config.notification.send_failed_message.clone(),
            );
        }
    }
}

/// Wait out the banner timeout, then dismiss that banner only. A newer
/// notification has a different id, so the reducer ignores a stale dismissal.
pub async fn dismiss_after<F>(id: u64, after_ms: u64, dispatch: F)
where
    F: FnOnce(ContactAction),
{
    sleep_ms(after_ms).await;
    debug!("[Contact] Auto-dismissing notification {}", id);
    dispatch(ContactAction::DismissNotification(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::form_validation::field_status;
    use crate::services::config::SubmissionConfig;
    use crate::services::errors::{ContactError, ContactResult};
    use crate::services::submission::SimulatedSubmitter;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    struct CountingSubmitter {
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for CountingSubmitter {
        async fn submit(&self, _request: SubmissionRequest) -> ContactResult<()> {
            self.calls.set(self.calls.get() + 1);
            Err(ContactError::SubmissionFailed {
                reason: "endpoint unreachable".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    struct FieldRejectingSubmitter;

    #[async_trait(?Send)]
    impl ContactSubmitter for FieldRejectingSubmitter {
        async fn submit(&self, _request: SubmissionRequest) -> ContactResult<()> {
            Err(ContactError::FormatInvalid {
                field: Field::Email,
                message: "Please enter a valid email address (invalid email).".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "field-rejecting"
        }
    }

    fn type_into(state: &mut ContactState, field: Field, value: &str) {
        if field == Field::Service {
            state.reduce_in_place(ContactAction::ServiceSelected(value.to_string()));
        } else {
            state.reduce_in_place(ContactAction::FieldEdited(field, value.to_string()));
            state.reduce_in_place(ContactAction::FieldBlurred(field));
        }
    }

    fn valid_state(config: &ContactConfig) -> ContactState {
        let mut state = ContactState::new(&config.button.idle_label);
        type_into(&mut state, Field::Name, "João");
        type_into(&mut state, Field::Email, "joao@example.com");
        type_into(&mut state, Field::Service, "consulting");
        type_into(&mut state, Field::Message, "I would like a quote please");
        state
    }

    async fn submit(
        state: &mut ContactState,
        config: &ContactConfig,
        submitter: &dyn ContactSubmitter,
    ) -> Option<SubmissionOutcome> {
        let request = begin_submission(state, config)?;
        assert!(state.submit_button.disabled);
        assert_eq!(state.submit_button.label, config.button.busy_label);

        let outcome = run_submission(submitter, request).await;
        finish_submission_with(state, outcome.clone(), config);
        Some(outcome)
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);
        let submitter = SimulatedSubmitter::new(SubmissionConfig::instant(true));

        let outcome = submit(&mut state, &config, &submitter).await;
        assert_eq!(outcome, Some(SubmissionOutcome::Success));

        assert_eq!(state.values, ContactFormValues::default());
        assert!(state.errors.is_clear());
        for field in Field::ALL {
            assert_eq!(field_status(&state, field), FieldStatus::Neutral);
        }

        let notification = state.notification.clone().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, config.notification.sent_message);

        assert!(!state.submit_button.disabled);
        assert_eq!(state.submit_button.label, "Send Message");
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_missing_name_blocks_submission() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);
        state.reduce_in_place(ContactAction::FieldEdited(Field::Name, String::new()));

        let submitter = CountingSubmitter {
            calls: Cell::new(0),
        };
        let outcome = submit(&mut state, &config, &submitter).await;
        assert_eq!(outcome, None);
        assert_eq!(submitter.calls.get(), 0);

        assert_eq!(
            field_status(&state, Field::Name),
            FieldStatus::Error("Name is required.".to_string())
        );
        for field in [Field::Email, Field::Service, Field::Message] {
            assert_eq!(field_status(&state, field), FieldStatus::Success);
        }

        let notification = state.notification.clone().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(!state.submit_button.disabled);
    }

    #[tokio::test]
    async fn test_message_length_errors_block_submission() {
        let config = ContactConfig::new();

        let mut state = valid_state(&config);
        type_into(&mut state, Field::Message, "short");
        assert!(begin_submission(&mut state, &config).is_none());
        assert!(state
            .errors
            .get(Field::Message)
            .contains("at least 10 characters"));

        type_into(&mut state, Field::Message, &"a".repeat(1001));
        assert!(begin_submission(&mut state, &config).is_none());
        assert!(state
            .errors
            .get(Field::Message)
            .contains("exceeds 1000 characters"));
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_values_and_restores_button() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);
        let before = state.values.clone();
        let submitter = SimulatedSubmitter::new(SubmissionConfig::instant(false));

        let outcome = submit(&mut state, &config, &submitter).await;
        assert!(matches!(outcome, Some(SubmissionOutcome::Failure(_))));

        assert_eq!(state.values, before);
        assert!(state.errors.is_clear());
        assert!(!state.submit_button.disabled);
        assert_eq!(state.submit_button.label, config.button.idle_label);

        let notification = state.notification.clone().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, config.notification.send_failed_message);
    }

    #[tokio::test]
    async fn test_submitter_error_becomes_failure_outcome() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);
        let submitter = CountingSubmitter {
            calls: Cell::new(0),
        };

        let outcome = submit(&mut state, &config, &submitter).await;
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(
            outcome,
            Some(SubmissionOutcome::Failure(
                "Submission failed: endpoint unreachable".to_string()
            ))
        );
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_finish_through_reducer_restores_button() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);

        assert!(begin_submission(&mut state, &config).is_some());
        assert!(state.is_submitting());

        state.reduce_in_place(ContactAction::SubmissionFinished(
            SubmissionOutcome::Failure("timeout".to_string()),
        ));
        assert!(!state.is_submitting());
        assert!(!state.submit_button.disabled);
        assert_eq!(state.submit_button.label, config.button.idle_label);
    }

    #[tokio::test]
    async fn test_field_error_from_submitter_becomes_generic_failure() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);

        let outcome = submit(&mut state, &config, &FieldRejectingSubmitter).await;
        assert_eq!(
            outcome,
            Some(SubmissionOutcome::Failure(
                "Submission rejected the email field".to_string()
            ))
        );
        // Inline errors only come from the form's own rules
        assert!(state.errors.is_clear());
        assert_eq!(
            state.notification.clone().unwrap().message,
            config.notification.send_failed_message
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_dismisses_after_timeout() {
        let config = ContactConfig::new();
        let mut state = valid_state(&config);
        submit(
            &mut state,
            &config,
            &SimulatedSubmitter::new(SubmissionConfig::instant(true)),
        )
        .await;
        let id = state.notification.as_ref().map(|n| n.id).unwrap();

        let dispatched = RefCell::new(Vec::new());
        let start = tokio::time::Instant::now();
        dismiss_after(id, config.notification.dismiss_after_ms, |action| {
            dispatched.borrow_mut().push(action)
        })
        .await;
        assert!(start.elapsed().as_millis() >= 5000);

        let actions = dispatched.into_inner();
        assert_eq!(actions, vec![ContactAction::DismissNotification(id)]);
        for action in actions {
            state.reduce_in_place(action);
        }
        assert!(state.notification.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_auto_dismiss_keeps_newer_notification() {
        let config = ContactConfig::new();
        let mut state = ContactState::new(&config.button.idle_label);

        assert!(begin_submission(&mut state, &config).is_none());
        let stale_id = state.notification.as_ref().map(|n| n.id).unwrap();

        dismiss_after(stale_id, config.notification.dismiss_after_ms, |action| {
            // A newer banner arrived while the old timer was pending
            state.reduce_in_place(ContactAction::ShowNotification(
                NotificationKind::Error,
                "Error sending message. Please try again.".to_string(),
            ));
            state.reduce_in_place(action);
        })
        .await;

        let current = state.notification.clone().unwrap();
        assert_ne!(current.id, stale_id);
        assert_eq!(current.message, "Error sending message. Please try again.");
    }
}
