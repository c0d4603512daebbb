//! Form snapshot to marketplace search URL translation.

use crate::city::CitySelection;
use crate::code_tables::{
    AD_TYPES, CodeTable, ENERGY_RATES, FLOOR_POSITIONS, GLOBAL_CONDITIONS, OUTSIDE_ACCESS,
    REAL_ESTATE_TYPES, SALE_TYPES,
};
use crate::form_snapshot::{FieldValue, FormSnapshot};
use crate::query_params::QueryParams;
use crate::range::{format_range, parse_leading_int, selection_to_range};


/// Search endpoint of the target marketplace.
pub const SEARCH_BASE_URL: &str = "https://www.leboncoin.fr/recherche";

/// Property sales category, the default.
const CATEGORY_SALES: &str = "9";
/// Rentals category, used when the transaction field asks for one.
const CATEGORY_RENTALS: &str = "10";

/// Map a submitted form to the full search URL. Never fails: missing or
/// unrecognized fields just shorten the query string.
pub fn map_to_search_url(snapshot: &FormSnapshot) -> String {
    let params = map_to_search_params(snapshot);
    format!("{SEARCH_BASE_URL}?{}", params.to_query_string())
}

/// Map a submitted form to the ordered query parameter list. Parameter
/// order is part of the output contract and must not be rearranged.
pub fn map_to_search_params(snapshot: &FormSnapshot) -> QueryParams {
    let mut params = QueryParams::new();

    let category = if snapshot.scalar("bien") == Some("location") {
        CATEGORY_RENTALS
    } else {
        CATEGORY_SALES
    };
    params.append("category", category);

    append_coded(&mut params, "real_estate_type", REAL_ESTATE_TYPES, snapshot.values("type_bien"));
    append_coded(&mut params, "ad_type", AD_TYPES, snapshot.values("type_annonces"));

    if let Some(city) = &snapshot.ville_data {
        params.append("locations", location_string(city, snapshot.field("rayon")));
    }

    append_range(&mut params, "price", snapshot, "prix_min", "prix_max");
    append_range(&mut params, "square", snapshot, "surface_min", "surface_max");

    append_coded(&mut params, "immo_sell_type", SALE_TYPES, snapshot.values("type_vente"));

    append_range(
        &mut params,
        "land_plot_surface",
        snapshot,
        "surface_terrain_min",
        "surface_terrain_max",
    );

    if let Some(rooms) = selection_to_range(snapshot.field("pieces")) {
        params.append("rooms", rooms);
    }
    if let Some(bedrooms) = selection_to_range(snapshot.field("chambres")) {
        params.append("bedrooms", bedrooms);
    }

    append_coded(&mut params, "outside_access", OUTSIDE_ACCESS, snapshot.values("exterieur"));
    append_coded(&mut params, "floor", FLOOR_POSITIONS, snapshot.values("etage"));

    if snapshot.scalar("ascenseur") == Some("oui") {
        params.append("elevator", "1");
    }

    // Condition codes are ordinal and the target expects them ascending,
    // whatever order the checkboxes were ticked in.
    let mut conditions = GLOBAL_CONDITIONS.translate_all(snapshot.values("etat"));
    if !conditions.is_empty() {
        conditions.sort_by_key(|code| code.parse::<u8>().unwrap_or(u8::MAX));
        params.append("global_condition", conditions.join(","));
    }

    append_coded(&mut params, "energy_rate", ENERGY_RATES, snapshot.values("dpe"));

    if snapshot.scalar("urgente") == Some("oui") {
        params.append("urgent", "1");
    }

    params.append("sort_by", "time");
    params.append("sort_order", "desc");

    params
}

/// Location string for the query: `<name>_<postal>`, with a
/// `__<lat>_<lon>_<radiusMeters>` suffix when a usable radius was
/// requested and the city carries a finite centroid.
pub fn location_string(city: &CitySelection, rayon: Option<&FieldValue>) -> String {
    let mut location = city.nom.clone();
    if let Some(postal) = city.primary_postal_code() {
        location.push('_');
        location.push_str(postal);
    }
    // A kilometer count whose meter conversion leaves the integer range
    // is as unusable as a non-numeric token.
    let meters = rayon
        .and_then(|value| parse_leading_int(&value.joined()))
        .and_then(|radius_km| radius_km.checked_mul(1000));
    if let (Some(meters), Some((lon, lat))) = (meters, city.centroid()) {
        location = format!("{location}__{lat}_{lon}_{meters}");
    }
    location
}

fn append_coded(params: &mut QueryParams, name: &str, table: CodeTable, tokens: Vec<&str>) {
    let codes = table.translate_all(tokens);
    if !codes.is_empty() {
        params.append(name, codes.join(","));
    }
}

fn append_range(
    params: &mut QueryParams,
    name: &str,
    snapshot: &FormSnapshot,
    min_field: &str,
    max_field: &str,
) {
    if let Some(range) = format_range(snapshot.field(min_field), snapshot.field(max_field)) {
        params.append(name, range);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::GeoPoint;

    fn city(nom: &str, postal: &[&str]) -> CitySelection {
        CitySelection {
            nom: nom.to_string(),
            codes_postaux: postal.iter().map(|code| code.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_snapshot_yields_default_query() {
        let url = map_to_search_url(&FormSnapshot::default());
        assert_eq!(url, "https://www.leboncoin.fr/recherche?category=9&sort_by=time&sort_order=desc");
    }

    #[test]
    fn rental_transaction_switches_category() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("bien", "location");
        assert_eq!(map_to_search_params(&snapshot).get("category"), Some("10"));

        snapshot.set("bien", "vente");
        assert_eq!(map_to_search_params(&snapshot).get("category"), Some("9"));
    }

    #[test]
    fn condition_codes_sort_ascending_regardless_of_input_order() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("etat", vec!["bon", "tres_bon"]);
        assert_eq!(map_to_search_params(&snapshot).get("global_condition"), Some("1,2"));

        snapshot.set("etat", vec!["travaux", "renove", "tres_bon"]);
        assert_eq!(map_to_search_params(&snapshot).get("global_condition"), Some("1,3,5"));
    }

    #[test]
    fn unknown_property_type_is_dropped_but_amenity_passes_through() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("type_bien", vec!["chateau"]);
        snapshot.set("exterieur", vec!["jardin", "veranda"]);
        let params = map_to_search_params(&snapshot);
        assert_eq!(params.get("real_estate_type"), None);
        assert_eq!(params.get("outside_access"), Some("garden,veranda"));
    }

    #[test]
    fn floor_positions_join_and_pass_unknown_tokens() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("etage", vec!["rdc", "mezzanine"]);
        assert_eq!(
            map_to_search_params(&snapshot).get("floor"),
            Some("ground_floor,mezzanine")
        );
    }

    #[test]
    fn flags_require_the_exact_affirmative_token() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("ascenseur", "oui");
        snapshot.set("urgente", "non");
        let params = map_to_search_params(&snapshot);
        assert_eq!(params.get("elevator"), Some("1"));
        assert_eq!(params.get("urgent"), None);
    }

    #[test]
    fn location_without_postal_code_degrades_to_name_only() {
        let snapshot = FormSnapshot {
            ville_data: Some(city("Lyon", &[])),
            ..Default::default()
        };
        assert_eq!(map_to_search_params(&snapshot).get("locations"), Some("Lyon"));
    }

    #[test]
    fn radius_requires_a_finite_centroid() {
        let mut snapshot = FormSnapshot {
            ville_data: Some(city("Lyon", &["69001"])),
            ..Default::default()
        };
        snapshot.set("rayon", "10");
        // No centroid on the record, the radius request is ignored.
        assert_eq!(map_to_search_params(&snapshot).get("locations"), Some("Lyon_69001"));

        if let Some(city) = snapshot.ville_data.as_mut() {
            city.centre = Some(GeoPoint {
                kind: "Point".to_string(),
                coordinates: vec![4.8357, 45.764],
            });
        }
        assert_eq!(
            map_to_search_params(&snapshot).get("locations"),
            Some("Lyon_69001__45.764_4.8357_10000")
        );
    }

    #[test]
    fn radius_parses_leniently_but_skips_non_numeric_input() {
        let mut snapshot = FormSnapshot {
            ville_data: Some(city("Lyon", &["69001"])),
            ..Default::default()
        };
        if let Some(city) = snapshot.ville_data.as_mut() {
            city.centre = Some(GeoPoint {
                kind: "Point".to_string(),
                coordinates: vec![4.8357, 45.764],
            });
        }
        snapshot.set("rayon", "25 km");
        assert_eq!(
            map_to_search_params(&snapshot).get("locations"),
            Some("Lyon_69001__45.764_4.8357_25000")
        );

        snapshot.set("rayon", "toute la France");
        assert_eq!(map_to_search_params(&snapshot).get("locations"), Some("Lyon_69001"));
    }

    #[test]
    fn oversized_radius_is_ignored() {
        let mut snapshot = FormSnapshot {
            ville_data: Some(city("Lyon", &["69001"])),
            ..Default::default()
        };
        if let Some(city) = snapshot.ville_data.as_mut() {
            city.centre = Some(GeoPoint {
                kind: "Point".to_string(),
                coordinates: vec![4.8357, 45.764],
            });
        }
        // More kilometers than fit in the meter field once converted.
        snapshot.set("rayon", "9223372036854776");
        assert_eq!(map_to_search_params(&snapshot).get("locations"), Some("Lyon_69001"));
    }

    #[test]
    fn room_and_bedroom_selections_become_ranges() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("pieces", vec!["2", "3", "4"]);
        snapshot.set("chambres", "8+");
        let params = map_to_search_params(&snapshot);
        assert_eq!(params.get("rooms"), Some("2-4"));
        assert_eq!(params.get("bedrooms"), Some("8-"));
    }

    #[test]
    fn parameter_order_is_stable() {
        let mut snapshot = FormSnapshot {
            ville_data: Some(city("Nice", &["06000"])),
            ..Default::default()
        };
        snapshot.set("type_bien", "maison");
        snapshot.set("prix_min", "100000");
        snapshot.set("etat", "bon");
        let params = map_to_search_params(&snapshot);
        let names: Vec<&str> = params
            .pairs()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "category",
                "real_estate_type",
                "locations",
                "price",
                "global_condition",
                "sort_by",
                "sort_order",
            ]
        );
    }
}
