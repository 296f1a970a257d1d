use super::clamp_score;
use super::geo::haversine_km;
use crate::engine::domain::{Property, Request};

const RADIUS_DECAY_POINTS: f64 = 30.0;

/// City/zone/radius match quality.
///
/// City hits are resolved first: an accepted city with a matching zone is a
/// perfect hit, a city hit in the wrong zone is close-but-not-exact (70), and
/// a city hit with no zone restriction (or no zone on the listing) stays
/// perfect. Without a city hit the request's search circle decides: inside
/// the radius the score decays linearly toward a 30-point penalty at the
/// boundary, outside it the listing is a miss.
pub(crate) fn score_location(property: &Property, request: &Request) -> u8 {
    let city_accepted = request
        .cities
        .iter()
        .any(|city| city.eq_ignore_ascii_case(&property.city));

    if city_accepted {
        if !request.zones.is_empty() {
            if let Some(zone) = &property.zone {
                return if request.zones.iter().any(|z| z.eq_ignore_ascii_case(zone)) {
                    100
                } else {
                    70
                };
            }
        }
        return 100;
    }

    if let (Some(center), Some(radius), Some(coords)) =
        (request.center, request.radius_km, property.coordinates)
    {
        if radius > 0.0 {
            let distance = haversine_km(center, coords);
            if distance <= radius {
                return clamp_score(100.0 - (distance / radius) * RADIUS_DECAY_POINTS);
            }
        }
        return 0;
    }

    0
}
