//! Payload loading and city attachment for the CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use common::form_snapshot::FormSnapshot;
use tracing::{info, warn};


/// Read a submission payload from a JSON file, or stdin when the path is
/// absent or `-`.
pub fn load_snapshot(path: Option<&Path>) -> Result<FormSnapshot> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let snapshot: FormSnapshot = serde_json::from_str(&raw)?;
    Ok(snapshot)
}

/// Resolve a commune by name and attach it to the payload, the way the
/// form attaches the autocomplete pick. Takes the top lookup hit, which
/// is the most populated match.
pub async fn attach_city(snapshot: &mut FormSnapshot, name: &str) -> Result<()> {
    let communes = match backend::api::search_communes(name, 10).await {
        Ok(communes) => communes,
        Err(err) => {
            warn!("commune lookup failed, using built-in list: {:#}", err);
            backend::api::fallback_communes(name)
        }
    };
    match communes.into_iter().next() {
        Some(city) => {
            info!("selected commune {} ({})", city.nom, city.code.as_deref().unwrap_or("?"));
            snapshot.ville_data = Some(city);
            Ok(())
        }
        None => anyhow::bail!("no commune found for {:?}", name),
    }
}
