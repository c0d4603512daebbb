//! Service client modules and exports.

mod city_search;
pub use city_search::{fallback_communes, search_communes};

mod webhook_delivery;
pub use webhook_delivery::{
    WebhookOutcome, resolve_webhook_url, send_to_webhook, submission_parts,
    submission_payload_json,
};
