//! End-to-end payload checks: literal JSON submissions in, literal URLs out.

use common::form_snapshot::FormSnapshot;
use common::mapper::{map_to_search_params, map_to_search_url};


fn snapshot(payload: &str) -> FormSnapshot {
    serde_json::from_str(payload).expect("payload deserializes")
}

#[test]
fn saint_etienne_submission_maps_to_expected_url() {
    let payload = r#"{
        "ville_display": "Saint-Étienne",
        "ville": "42218",
        "rayon": "3",
        "bien": "vente",
        "type_bien": "appartement",
        "type_annonces": "offres",
        "prix_min": "",
        "prix_max": "80000",
        "surface_min": "",
        "surface_max": "100",
        "chambres": "3,4",
        "type_vente": ["ancien", "neuf"],
        "etat": ["tres_bon", "bon", "renove"],
        "ville_data": {
            "nom": "Saint-Étienne",
            "code": "42218",
            "codesPostaux": ["42000"]
        }
    }"#;

    assert_eq!(
        map_to_search_url(&snapshot(payload)),
        "https://www.leboncoin.fr/recherche?category=9&real_estate_type=1&ad_type=offer\
         &locations=Saint-%C3%89tienne_42000&price=-80000&square=-100\
         &immo_sell_type=old%2Cnew&bedrooms=3-4&global_condition=1%2C2%2C3\
         &sort_by=time&sort_order=desc"
    );
}

#[test]
fn empty_submission_still_yields_a_well_formed_url() {
    assert_eq!(
        map_to_search_url(&snapshot("{}")),
        "https://www.leboncoin.fr/recherche?category=9&sort_by=time&sort_order=desc"
    );
}

#[test]
fn radius_submission_appends_centroid_and_meters() {
    let payload = r#"{
        "bien": "vente",
        "rayon": "10",
        "ville_data": {
            "nom": "Lyon",
            "code": "69123",
            "codesPostaux": ["69001"],
            "centre": {"type": "Point", "coordinates": [4.8357, 45.764]}
        }
    }"#;

    let params = map_to_search_params(&snapshot(payload));
    assert_eq!(params.get("locations"), Some("Lyon_69001__45.764_4.8357_10000"));
}

#[test]
fn full_rental_submission_exercises_every_parameter() {
    let payload = r#"{
        "bien": "location",
        "type_bien": ["appartement", "maison"],
        "type_annonces": "offres",
        "rayon": "5",
        "prix_min": "500",
        "prix_max": "900",
        "surface_min": "30",
        "surface_terrain_min": "200",
        "pieces": "8+",
        "chambres": ["2", "3"],
        "exterieur": ["balcon", "terrasse"],
        "etage": "eleve",
        "ascenseur": "oui",
        "etat": ["renove", "bon"],
        "dpe": ["B", "A"],
        "urgente": "oui",
        "ville_data": {
            "nom": "Nice",
            "codesPostaux": ["06000"],
            "centre": {"type": "Point", "coordinates": [7.2619, 43.7102]}
        }
    }"#;

    let params = map_to_search_params(&snapshot(payload));
    let rendered: Vec<(&str, &str)> = params
        .pairs()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("category", "10"),
            ("real_estate_type", "1,2"),
            ("ad_type", "offer"),
            ("locations", "Nice_06000__43.7102_7.2619_5000"),
            ("price", "500-900"),
            ("square", "30-"),
            ("land_plot_surface", "200-"),
            ("rooms", "8-"),
            ("bedrooms", "2-3"),
            ("outside_access", "balcony,terrace"),
            ("floor", "not_ground_floor"),
            ("elevator", "1"),
            ("global_condition", "2,3"),
            ("energy_rate", "b,a"),
            ("urgent", "1"),
            ("sort_by", "time"),
            ("sort_order", "desc"),
        ]
    );
}
