//! Output rendering for mapper results and commune listings.

use common::city::CitySelection;
use common::query_params::QueryParams;


/// Print the generated URL, followed by one `name = value` line per
/// query parameter when asked for.
pub fn print_mapping(url: &str, params: &QueryParams, show_params: bool) {
    println!("{url}");
    if show_params {
        println!();
        for (name, value) in params.pairs() {
            println!("{name} = {value}");
        }
    }
}

/// One-line commune summary in the autocomplete's detail format, parts
/// omitted when the record lacks them.
pub fn commune_line(city: &CitySelection) -> String {
    let mut line = city.nom.clone();
    if let Some(code) = &city.code {
        line.push_str(&format!(" ({code})"));
    }
    let mut details = Vec::new();
    if let Some(postal) = city.primary_postal_code() {
        details.push(postal.to_string());
    }
    if let Some(departement) = &city.code_departement {
        details.push(format!("Dep. {departement}"));
    }
    if let Some(population) = city.population {
        details.push(format!("{population} hab."));
    }
    if !details.is_empty() {
        line.push_str("  ");
        line.push_str(&details.join(" - "));
    }
    line
}
