use crate::engine::domain::{
    Activity, ActivityKind, ContractType, MatchStatus, PendingMatch, Property, PropertyKind,
    PropertyStatus, Request,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed evaluation instant so every test sees the same clock.
pub(super) fn eval_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn listing(code: &str) -> Property {
    Property {
        code: code.to_string(),
        building_code: None,
        status: PropertyStatus::Available,
        contract: ContractType::Sale,
        kind: PropertyKind::Apartment,
        city: "Milano".to_string(),
        zone: None,
        coordinates: None,
        price_sale: None,
        price_rent: None,
        sqm: None,
        rooms: None,
        bedrooms: None,
        bathrooms: None,
        has_elevator: false,
        has_parking: false,
        has_garden: false,
        has_terrace: false,
        condition: None,
        energy_class: None,
        year_built: None,
        floor: None,
        created_at: eval_instant() - Duration::days(90),
    }
}

/// The worked example listing: a Brera apartment that fits its mandate.
pub(super) fn brera_listing() -> Property {
    let mut property = listing("MI-0042");
    property.zone = Some("Brera".to_string());
    property.price_sale = Some(350_000.0);
    property.sqm = Some(85.0);
    property.rooms = Some(3);
    property.has_elevator = true;
    property
}

pub(super) fn sale_request() -> Request {
    Request {
        contract: ContractType::Sale,
        cities: Vec::new(),
        zones: Vec::new(),
        center: None,
        radius_km: None,
        kinds: Vec::new(),
        price_min: None,
        price_max: None,
        sqm_min: None,
        sqm_max: None,
        rooms_min: None,
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
    }
}

/// The worked example mandate: Milano/Brera, 300-400k, 70-100 sqm, 3+ rooms.
pub(super) fn brera_request() -> Request {
    let mut request = sale_request();
    request.cities = vec!["Milano".to_string()];
    request.zones = vec!["Brera".to_string()];
    request.price_min = Some(300_000.0);
    request.price_max = Some(400_000.0);
    request.sqm_min = Some(70.0);
    request.sqm_max = Some(100.0);
    request.rooms_min = Some(3);
    request
}

pub(super) fn visit(days_ago: i64) -> Activity {
    Activity {
        kind: ActivityKind::Visit,
        completed_at: Some(eval_instant() - Duration::days(days_ago)),
    }
}

pub(super) fn call(days_ago: i64) -> Activity {
    Activity {
        kind: ActivityKind::Call,
        completed_at: Some(eval_instant() - Duration::days(days_ago)),
    }
}

pub(super) fn pending(total_score: u8, status: MatchStatus) -> PendingMatch {
    PendingMatch {
        total_score,
        status,
    }
}
