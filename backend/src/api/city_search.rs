//! Commune lookup against the French government geocoding API.

use common::city::CitySelection;
use common::query_params::QueryParams;
use tracing::debug;


const DEFAULT_GEO_API_URL: &str = "https://geo.api.gouv.fr";

/// Fields requested from the API, matching what `CitySelection` models.
const COMMUNE_FIELDS: &str = "nom,code,codesPostaux,codeDepartement,codeRegion,population,centre";

/// Query the geocoding API for communes matching a name, most populated
/// first. The endpoint comes from `GEO_API_URL` when set.
pub async fn search_communes(query: &str, limit: usize) -> anyhow::Result<Vec<CitySelection>> {
    let api_url = std::env::var("GEO_API_URL").unwrap_or(DEFAULT_GEO_API_URL.to_string());
    let mut params = QueryParams::new();
    params.append("nom", query);
    params.append("fields", COMMUNE_FIELDS);
    params.append("boost", "population");
    params.append("limit", limit.to_string());
    let url = format!("{}/communes?{}", api_url, params.to_query_string());
    debug!("commune lookup: {}", url);

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let communes: Vec<CitySelection> = serde_json::from_str(&response_txt)?;
    Ok(communes)
}

/// Offline stand-in list for when the geocoding API is unreachable.
/// Matches on a case-insensitive name substring.
pub fn fallback_communes(query: &str) -> Vec<CitySelection> {
    let needle = query.to_lowercase();
    fallback_records()
        .into_iter()
        .filter(|city| city.nom.to_lowercase().contains(&needle))
        .collect()
}

fn fallback_records() -> Vec<CitySelection> {
    vec![
        commune("Paris", "75056", "75001", "75", 2_161_000),
        commune("Lyon", "69123", "69001", "69", 516_092),
        commune("Marseille", "13055", "13001", "13", 869_815),
        commune("Toulouse", "31555", "31000", "31", 479_553),
        commune("Nice", "06088", "06000", "06", 340_017),
    ]
}

fn commune(
    nom: &str,
    code: &str,
    postal: &str,
    departement: &str,
    population: u64,
) -> CitySelection {
    CitySelection {
        nom: nom.to_string(),
        code: Some(code.to_string()),
        codes_postaux: vec![postal.to_string()],
        code_departement: Some(departement.to_string()),
        code_region: None,
        population: Some(population),
        centre: None,
    }
}
