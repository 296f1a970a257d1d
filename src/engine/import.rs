//! CSV portfolio snapshot import for offline batch recomputation.
//!
//! Parses a properties export plus an optional activities export into domain
//! records. All categorical columns are validated here, so the scorers and
//! the urgency classifier downstream never see malformed values.

use crate::engine::domain::{
    Activity, ActivityKind, Condition, ContractType, Coordinates, DomainError, EnergyClass,
    Property, PropertyKind, PropertyStatus,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioImportError {
    #[error("failed to read portfolio export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid portfolio CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("property '{property}' has unparseable timestamp '{value}'")]
    InvalidTimestamp { property: String, value: String },
}

/// A consistent read of one portfolio: listings plus their activity history.
#[derive(Debug, Default)]
pub struct PortfolioSnapshot {
    pub properties: Vec<Property>,
    activities: HashMap<String, Vec<Activity>>,
}

impl PortfolioSnapshot {
    pub fn from_paths(
        properties: impl AsRef<Path>,
        activities: Option<impl AsRef<Path>>,
    ) -> Result<Self, PortfolioImportError> {
        let properties = File::open(properties)?;
        let activities = activities.map(File::open).transpose()?;
        Self::from_readers(properties, activities)
    }

    pub fn from_readers<R: Read>(
        properties: R,
        activities: Option<R>,
    ) -> Result<Self, PortfolioImportError> {
        let properties = parse_properties(properties)?;
        let activities = match activities {
            Some(reader) => parse_activities(reader)?,
            None => HashMap::new(),
        };
        Ok(Self {
            properties,
            activities,
        })
    }

    /// Completed and open activities recorded for one property.
    pub fn activities_for(&self, property_code: &str) -> &[Activity] {
        self.activities
            .get(property_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn parse_properties<R: Read>(reader: R) -> Result<Vec<Property>, PortfolioImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut properties = Vec::new();
    for record in csv_reader.deserialize::<PropertyRow>() {
        properties.push(record?.into_property()?);
    }
    Ok(properties)
}

fn parse_activities<R: Read>(
    reader: R,
) -> Result<HashMap<String, Vec<Activity>>, PortfolioImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut activities: HashMap<String, Vec<Activity>> = HashMap::new();
    for record in csv_reader.deserialize::<ActivityRow>() {
        let row = record?;
        let completed_at = row
            .completed_at
            .as_deref()
            .map(|raw| {
                parse_timestamp(raw).ok_or_else(|| PortfolioImportError::InvalidTimestamp {
                    property: row.property_code.clone(),
                    value: raw.to_string(),
                })
            })
            .transpose()?;

        activities
            .entry(row.property_code)
            .or_default()
            .push(Activity {
                kind: ActivityKind::parse(&row.kind)?,
                completed_at,
            });
    }
    Ok(activities)
}

#[derive(Debug, Deserialize)]
struct PropertyRow {
    code: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    building_code: Option<String>,
    status: String,
    contract: String,
    kind: String,
    city: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    zone: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
    #[serde(default)]
    price_sale: Option<f64>,
    #[serde(default)]
    price_rent: Option<f64>,
    #[serde(default)]
    sqm: Option<f64>,
    #[serde(default)]
    rooms: Option<u8>,
    #[serde(default)]
    bedrooms: Option<u8>,
    #[serde(default)]
    bathrooms: Option<u8>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_elevator: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_parking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_garden: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_terrace: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    condition: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    energy_class: Option<String>,
    #[serde(default)]
    year_built: Option<u16>,
    #[serde(default)]
    floor: Option<i8>,
    created_at: String,
}

impl PropertyRow {
    fn into_property(self) -> Result<Property, PortfolioImportError> {
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| {
            PortfolioImportError::InvalidTimestamp {
                property: self.code.clone(),
                value: self.created_at.clone(),
            }
        })?;

        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        Ok(Property {
            code: self.code,
            building_code: self.building_code,
            status: PropertyStatus::parse(&self.status)?,
            contract: ContractType::parse(&self.contract)?,
            kind: PropertyKind::parse(&self.kind)?,
            city: self.city,
            zone: self.zone,
            coordinates,
            price_sale: self.price_sale,
            price_rent: self.price_rent,
            sqm: self.sqm,
            rooms: self.rooms,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            has_elevator: parse_flag(self.has_elevator.as_deref()),
            has_parking: parse_flag(self.has_parking.as_deref()),
            has_garden: parse_flag(self.has_garden.as_deref()),
            has_terrace: parse_flag(self.has_terrace.as_deref()),
            condition: self
                .condition
                .as_deref()
                .map(Condition::parse)
                .transpose()?,
            energy_class: self
                .energy_class
                .as_deref()
                .map(EnergyClass::parse)
                .transpose()?,
            year_built: self.year_built,
            floor: self.floor,
            created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    property_code: String,
    kind: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    completed_at: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(str::to_ascii_lowercase).as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("y")
    )
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
