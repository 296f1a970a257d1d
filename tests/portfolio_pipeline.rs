use casamatch::engine::domain::{PropertyStatus, UrgencyLevel};
use casamatch::engine::import::PortfolioSnapshot;
use casamatch::engine::rollup::rollup_building;
use casamatch::engine::urgency::{classify_urgency, UrgencyConfig};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;
use std::io::Cursor;

const PROPERTIES_CSV: &str = "\
code,building_code,status,contract,kind,city,zone,lat,lng,price_sale,price_rent,sqm,rooms,bedrooms,bathrooms,has_elevator,has_parking,has_garden,has_terrace,condition,energy_class,year_built,floor,created_at
MI-0001,B-01,available,sale,apartment,Milano,Brera,45.47,9.19,350000,,85,3,2,1,true,,,,good,B,1998,2,2025-12-01
MI-0002,B-01,sold,sale,apartment,Milano,Brera,45.47,9.19,420000,,95,4,3,2,true,,,,excellent,A,2005,4,2025-10-01
MI-0003,B-01,available,sale,loft,Milano,Isola,45.48,9.18,280000,,60,2,1,1,,,,,fair,D,1975,0,2025-12-01
MI-0100,,available,rent,apartment,Milano,,,,,1500,70,3,2,1,true,,,,good,C,2010,1,2026-03-10
";

const ACTIVITIES_CSV: &str = "\
property_code,kind,completed_at
MI-0001,visit,2026-03-12T10:00:00Z
MI-0001,visit,2026-03-05T16:30:00Z
MI-0001,visit,2026-02-25 11:00:00
MI-0002,visit,2026-03-14T10:00:00Z
";

#[test]
fn snapshot_classifies_and_rolls_up_per_building() {
    let as_of = Utc
        .with_ymd_and_hms(2026, 3, 15, 12, 0, 0)
        .single()
        .expect("valid instant");

    let snapshot = PortfolioSnapshot::from_readers(
        Cursor::new(PROPERTIES_CSV.to_string()),
        Some(Cursor::new(ACTIVITIES_CSV.to_string())),
    )
    .expect("snapshot parses");

    let config = UrgencyConfig::default();
    let mut buildings: BTreeMap<String, Vec<(PropertyStatus, UrgencyLevel)>> = BTreeMap::new();
    let mut by_code = BTreeMap::new();

    for property in &snapshot.properties {
        let level = classify_urgency(
            property,
            snapshot.activities_for(&property.code),
            &[],
            &config,
            as_of,
        );
        if let Some(building) = &property.building_code {
            buildings
                .entry(building.clone())
                .or_default()
                .push((property.status, level));
        }
        by_code.insert(property.code.clone(), level);
    }

    // Three recent visits, last one three days ago: steady traffic.
    assert_eq!(by_code["MI-0001"], UrgencyLevel::Monitor);
    // Sold wins over yesterday's visit.
    assert_eq!(by_code["MI-0002"], UrgencyLevel::Sold);
    // Listed 104 days ago and never touched.
    assert_eq!(by_code["MI-0003"], UrgencyLevel::Urgent);
    // Five days on the market.
    assert_eq!(by_code["MI-0100"], UrgencyLevel::New);

    let rollup = rollup_building("B-01", &buildings["B-01"]);
    assert_eq!(rollup.active_units, 2);
    assert_eq!(rollup.sold_units, 1);
    // (Monitor 3 + Urgent 5) / 2
    assert_eq!(rollup.avg_urgency, Some(4.0));

    // Re-running over the same snapshot is idempotent.
    let again = classify_urgency(
        &snapshot.properties[0],
        snapshot.activities_for("MI-0001"),
        &[],
        &config,
        as_of,
    );
    assert_eq!(again, by_code["MI-0001"]);
}

mod scoring {
    use casamatch::engine::domain::{ContractType, Property, PropertyKind, PropertyStatus, Request};
    use casamatch::engine::matching::MatchEngine;
    use chrono::{Duration, Utc};

    fn brera_pair() -> (Property, Request) {
        let property = Property {
            code: "MI-0042".to_string(),
            building_code: None,
            status: PropertyStatus::Available,
            contract: ContractType::Sale,
            kind: PropertyKind::Apartment,
            city: "Milano".to_string(),
            zone: Some("Brera".to_string()),
            coordinates: None,
            price_sale: Some(350_000.0),
            price_rent: None,
            sqm: Some(85.0),
            rooms: Some(3),
            bedrooms: None,
            bathrooms: None,
            has_elevator: true,
            has_parking: false,
            has_garden: false,
            has_terrace: false,
            condition: None,
            energy_class: None,
            year_built: None,
            floor: None,
            created_at: Utc::now() - Duration::days(30),
        };
        let request = Request {
            contract: ContractType::Sale,
            cities: vec!["Milano".to_string()],
            zones: vec!["Brera".to_string()],
            center: None,
            radius_km: None,
            kinds: Vec::new(),
            price_min: Some(300_000.0),
            price_max: Some(400_000.0),
            sqm_min: Some(70.0),
            sqm_max: Some(100.0),
            rooms_min: Some(3),
            rooms_max: None,
            bedrooms_min: None,
            bathrooms_min: None,
            needs_elevator: false,
            needs_parking: false,
            needs_garden: false,
            needs_terrace: false,
            exclude_ground_floor: false,
            exclude_top_floor_without_elevator: false,
            condition_min: None,
            energy_class_min: None,
            year_built_min: None,
        };
        (property, request)
    }

    #[test]
    fn worked_example_scores_a_perfect_match() {
        let engine = MatchEngine::with_default_weights();
        let (property, request) = brera_pair();

        assert!(engine.passes_basic_filter(&property, &request));
        let score = engine.score(&property, &request);
        assert_eq!(
            (score.location, score.price, score.size, score.features, score.total),
            (100, 100, 100, 100, 100)
        );
    }

    #[test]
    fn worked_example_with_over_budget_price() {
        let engine = MatchEngine::with_default_weights();
        let (mut property, request) = brera_pair();
        property.price_sale = Some(450_000.0);

        let score = engine.score(&property, &request);
        assert_eq!(score.price, 81);
        assert_eq!(score.total, 94);
    }
}
