use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::SubmitError;
use crate::form::{ContactForm, Phase};

/// Prefix for reference ids synthesized when the endpoint accepts a
/// submission without assigning one (and for honeypot-absorbed attempts).
const REFERENCE_PREFIX: &str = "GENIUS";

/// Prefix for reference ids synthesized on the local development path.
const DEV_REFERENCE_PREFIX: &str = "DEV";

/// Latency simulated by the local path, standing in for the real call.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(1);

/// Result of one submission attempt, as surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Terminal success; the form is in [`Phase::Submitted`].
    Submitted { reference_id: String },
    /// Validation failed; field errors are recorded on the form and no
    /// network call was made.
    Invalid,
    /// Transport or server failure; the form is back in
    /// [`Phase::Editing`] with its values intact. The user is prompted to
    /// retry, never told which subtype failed.
    Failed,
}

/// JSON body sent to `POST <base>/api/contact`. The honeypot field is
/// stripped before send.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionPayload<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    budget: &'a str,
    timeline: &'a str,
    project_type: &'a str,
    message: &'a str,
}

impl<'a> SubmissionPayload<'a> {
    fn from_form(form: &'a ContactForm) -> Self {
        Self {
            name: &form.name,
            email: &form.email,
            company: &form.company,
            budget: &form.budget,
            timeline: &form.timeline,
            project_type: &form.project_type,
            message: &form.message,
        }
    }
}

/// Expected endpoint response. Any other 2xx body is tolerated; a missing
/// reference id is synthesized locally.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SubmissionReceipt {
    reference_id: Option<String>,
}

/// Transmits lead inquiries to the configured contact endpoint.
pub struct ContactClient {
    http: Client,
    api_base: Option<String>,
}

impl ContactClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            api_base: config.api.base.clone(),
        }
    }

    /// Run one submission attempt end to end.
    ///
    /// The form is borrowed exclusively for the whole await, so a second
    /// attempt cannot start while one is in flight (the same mutual
    /// exclusion the disabled submit control provides in the UI). No
    /// cancellation, no automatic retry, no timeout beyond the transport
    /// default.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        // Bot trap: absorb silently, skip validation and the network
        // entirely, and present success.
        if !form.honeypot.is_empty() {
            debug!("honeypot field populated, discarding submission");
            let reference_id = synthesize_reference(REFERENCE_PREFIX);
            form.set_phase(Phase::Submitted {
                reference_id: reference_id.clone(),
            });
            return SubmitOutcome::Submitted { reference_id };
        }

        if !form.validate() {
            debug!(errors = form.errors().len(), "contact form failed validation");
            return SubmitOutcome::Invalid;
        }

        form.set_phase(Phase::Submitting);
        let payload = SubmissionPayload::from_form(form);

        let result = match self.api_base.as_deref() {
            Some(base) => self.post(base, &payload).await,
            None => {
                info!(
                    name = payload.name,
                    email = payload.email,
                    "no API base configured, simulating contact submission"
                );
                tokio::time::sleep(SIMULATED_DELAY).await;
                Ok(synthesize_reference(DEV_REFERENCE_PREFIX))
            }
        };

        match result {
            Ok(reference_id) => {
                info!(%reference_id, "contact submission accepted");
                form.set_phase(Phase::Submitted {
                    reference_id: reference_id.clone(),
                });
                SubmitOutcome::Submitted { reference_id }
            }
            Err(err) => {
                error!(error = %err, "contact submission failed");
                form.set_phase(Phase::Editing);
                SubmitOutcome::Failed
            }
        }
    }

    async fn post(
        &self,
        base: &str,
        payload: &SubmissionPayload<'_>,
    ) -> Result<String, SubmitError> {
        let response = self
            .http
            .post(format!("{base}/api/contact"))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        // Tolerate any success body shape.
        let receipt: SubmissionReceipt = response.json().await.unwrap_or_default();
        Ok(receipt
            .reference_id
            .unwrap_or_else(|| synthesize_reference(REFERENCE_PREFIX)))
    }
}

fn synthesize_reference(prefix: &str) -> String {
    format!("{prefix}-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada Lovelace");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::ProjectType, "web-design");
        form.set(Field::Message, "We need a new marketing site.");
        form
    }

    fn offline_client() -> ContactClient {
        ContactClient::new(&AppConfig::default())
    }

    // start_paused makes the simulated delay complete instantly.
    #[tokio::test(start_paused = true)]
    async fn test_offline_submit_synthesizes_dev_reference() {
        let mut form = valid_form();
        let outcome = offline_client().submit(&mut form).await;

        let SubmitOutcome::Submitted { reference_id } = outcome else {
            panic!("expected Submitted, got {outcome:?}");
        };
        assert!(reference_id.starts_with("DEV-"));
        assert_eq!(form.reference_id(), Some(reference_id.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_submit_takes_simulated_delay() {
        let start = tokio::time::Instant::now();
        let mut form = valid_form();
        offline_client().submit(&mut form).await;
        assert_eq!(start.elapsed(), SIMULATED_DELAY);
    }

    #[tokio::test]
    async fn test_invalid_form_aborts_before_any_suspension() {
        let mut form = ContactForm::new();
        let outcome = offline_client().submit(&mut form).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(*form.phase(), Phase::Editing);
        assert_eq!(form.errors().len(), 4);
    }

    #[tokio::test]
    async fn test_honeypot_absorbed_as_success() {
        let mut form = valid_form();
        form.set(Field::Honeypot, "http://spam.example");
        let outcome = offline_client().submit(&mut form).await;

        let SubmitOutcome::Submitted { reference_id } = outcome else {
            panic!("expected Submitted, got {outcome:?}");
        };
        assert!(reference_id.starts_with("GENIUS-"));
        // Indistinguishable from success: no errors recorded.
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_payload_strips_honeypot_and_uses_camel_case() {
        let mut form = valid_form();
        form.set(Field::Honeypot, "bot");
        let payload = SubmissionPayload::from_form(&form);
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("honeypot").is_none());
        assert_eq!(value["projectType"], "web-design");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }
}
