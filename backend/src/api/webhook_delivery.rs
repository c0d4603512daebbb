//! Best-effort submission delivery to an automation webhook.

use common::form_snapshot::FormSnapshot;
use tracing::{info, warn};


const WEBHOOK_URL_ENV: &str = "FORM_LBC_WEBHOOK_URL";

/// Marker field identifying this form as the submission source.
const SUBMISSION_SOURCE: &str = "form-lbc";

/// What happened to a delivery attempt. Delivery is informational only
/// and must never block the search URL flow, so there is no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    Sent,
    NotConfigured,
    Failed(String),
}

/// Webhook endpoint resolution: an explicit override wins, then the
/// `FORM_LBC_WEBHOOK_URL` environment variable.
pub fn resolve_webhook_url(override_url: Option<&str>) -> Option<String> {
    if let Some(url) = override_url {
        let url = url.trim();
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }
    match std::env::var(WEBHOOK_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url.trim().to_string()),
        _ => None,
    }
}

/// POST a submission to the configured webhook as multipart form data,
/// one part per raw field plus the assembled metadata parts.
pub async fn send_to_webhook(
    override_url: Option<&str>,
    snapshot: &FormSnapshot,
    search_url: &str,
) -> WebhookOutcome {
    let Some(webhook_url) = resolve_webhook_url(override_url) else {
        info!("webhook not configured, skipping delivery");
        return WebhookOutcome::NotConfigured;
    };

    if !looks_like_webhook_endpoint(&webhook_url) {
        warn!("webhook URL does not look like a webhook endpoint: {}", webhook_url);
    }

    match post_submission(&webhook_url, snapshot, search_url).await {
        Ok(()) => {
            info!("submission delivered to webhook");
            WebhookOutcome::Sent
        }
        Err(err) => {
            warn!("webhook delivery failed: {:#}", err);
            WebhookOutcome::Failed(format!("{:#}", err))
        }
    }
}

/// JSON document mirroring the whole submission, with the generated
/// search URL injected next to the raw fields.
pub fn submission_payload_json(snapshot: &FormSnapshot, search_url: &str) -> anyhow::Result<String> {
    let mut payload = serde_json::to_value(snapshot)?;
    if let Some(object) = payload.as_object_mut() {
        object.insert(
            "leboncoin_url".to_string(),
            serde_json::Value::String(search_url.to_string()),
        );
    }
    Ok(serde_json::to_string(&payload)?)
}

/// Ordered text parts of the multipart body: raw fields first (repeated
/// names repeat the part), then the metadata parts.
pub fn submission_parts(
    snapshot: &FormSnapshot,
    search_url: &str,
) -> anyhow::Result<Vec<(String, String)>> {
    let mut parts = Vec::new();
    for (name, value) in &snapshot.fields {
        for token in value.values() {
            parts.push((name.clone(), token.to_string()));
        }
    }

    let ville_data = match &snapshot.ville_data {
        Some(city) => serde_json::to_string(city)?,
        None => "null".to_string(),
    };
    parts.push(("ville_data".to_string(), ville_data));
    parts.push(("payload_json".to_string(), submission_payload_json(snapshot, search_url)?));
    parts.push(("leboncoin_url".to_string(), search_url.to_string()));
    parts.push((
        "submitted_at".to_string(),
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    ));
    parts.push(("source".to_string(), SUBMISSION_SOURCE.to_string()));
    Ok(parts)
}

fn looks_like_webhook_endpoint(url: &str) -> bool {
    url.contains("/webhook/") || url.contains("/webhook-test/")
}

async fn post_submission(
    webhook_url: &str,
    snapshot: &FormSnapshot,
    search_url: &str,
) -> anyhow::Result<()> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in submission_parts(snapshot, search_url)? {
        form = form.text(name, value);
    }

    let client = reqwest::Client::new();
    let response = client.post(webhook_url).multipart(form).send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let response_txt = response.text().await?;
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    Ok(())
}
