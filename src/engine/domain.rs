use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raised when a categorical field carries a value outside its known scale.
/// Callers validate at the parsing boundary; the scorers assume clean input.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("unknown property status '{0}'")]
    UnknownStatus(String),
    #[error("unknown contract type '{0}'")]
    UnknownContractType(String),
    #[error("unknown property kind '{0}'")]
    UnknownKind(String),
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),
    #[error("unknown energy class '{0}'")]
    UnknownEnergyClass(String),
    #[error("unknown activity kind '{0}'")]
    UnknownActivityKind(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Reserved,
    UnderNegotiation,
    Sold,
    Rented,
    Archived,
}

impl PropertyStatus {
    /// Terminal statuses no longer take outreach attention.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Sold | Self::Rented | Self::Archived)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::UnderNegotiation => "Under Negotiation",
            Self::Sold => "Sold",
            Self::Rented => "Rented",
            Self::Archived => "Archived",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "under_negotiation" | "negotiation" => Ok(Self::UnderNegotiation),
            "sold" => Ok(Self::Sold),
            "rented" => Ok(Self::Rented),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Sale,
    Rent,
}

impl ContractType {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            other => Err(DomainError::UnknownContractType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment,
    Penthouse,
    Loft,
    Villa,
    Townhouse,
    Commercial,
}

impl PropertyKind {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "penthouse" => Ok(Self::Penthouse),
            "loft" => Ok(Self::Loft),
            "villa" => Ok(Self::Villa),
            "townhouse" => Ok(Self::Townhouse),
            "commercial" => Ok(Self::Commercial),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

/// Five-level condition scale, worst to best. Ordering is load-bearing:
/// the feature scorer compares against a requested minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    ToRenovate,
    Fair,
    Good,
    Excellent,
    New,
}

impl Condition {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "to_renovate" => Ok(Self::ToRenovate),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            "new" => Ok(Self::New),
            other => Err(DomainError::UnknownCondition(other.to_string())),
        }
    }
}

/// Energy performance scale, worst (G) to best (A+).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnergyClass {
    G,
    F,
    E,
    D,
    C,
    B,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl EnergyClass {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Self::G),
            "f" => Ok(Self::F),
            "e" => Ok(Self::E),
            "d" => Ok(Self::D),
            "c" => Ok(Self::C),
            "b" => Ok(Self::B),
            "a" => Ok(Self::A),
            "a+" | "a_plus" => Ok(Self::APlus),
            other => Err(DomainError::UnknownEnergyClass(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Listing snapshot as supplied by the CRUD layer. The engine reads these
/// fields and never mutates them; the only derived output it produces for a
/// property is its urgency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub code: String,
    #[serde(default)]
    pub building_code: Option<String>,
    pub status: PropertyStatus,
    pub contract: ContractType,
    pub kind: PropertyKind,
    pub city: String,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub price_sale: Option<f64>,
    #[serde(default)]
    pub price_rent: Option<f64>,
    #[serde(default)]
    pub sqm: Option<f64>,
    #[serde(default)]
    pub rooms: Option<u8>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<u8>,
    #[serde(default)]
    pub has_elevator: bool,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub has_terrace: bool,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub energy_class: Option<EnergyClass>,
    #[serde(default)]
    pub year_built: Option<u16>,
    #[serde(default)]
    pub floor: Option<i8>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// The price relevant to this listing's contract type.
    pub fn listed_price(&self) -> Option<f64> {
        match self.contract {
            ContractType::Sale => self.price_sale,
            ContractType::Rent => self.price_rent,
        }
    }
}

/// A client's search mandate. List fields are native sequences; an empty
/// list means the axis is unrestricted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub contract: ContractType,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub zones: Vec<String>,
    #[serde(default)]
    pub center: Option<Coordinates>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub kinds: Vec<PropertyKind>,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub sqm_min: Option<f64>,
    #[serde(default)]
    pub sqm_max: Option<f64>,
    #[serde(default)]
    pub rooms_min: Option<u8>,
    #[serde(default)]
    pub rooms_max: Option<u8>,
    #[serde(default)]
    pub bedrooms_min: Option<u8>,
    #[serde(default)]
    pub bathrooms_min: Option<u8>,
    #[serde(default)]
    pub needs_elevator: bool,
    #[serde(default)]
    pub needs_parking: bool,
    #[serde(default)]
    pub needs_garden: bool,
    #[serde(default)]
    pub needs_terrace: bool,
    #[serde(default)]
    pub exclude_ground_floor: bool,
    #[serde(default)]
    pub exclude_top_floor_without_elevator: bool,
    #[serde(default)]
    pub condition_min: Option<Condition>,
    #[serde(default)]
    pub energy_class_min: Option<EnergyClass>,
    #[serde(default)]
    pub year_built_min: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Visit,
    Call,
    Email,
    Valuation,
    FollowUp,
}

impl ActivityKind {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "visit" => Ok(Self::Visit),
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "valuation" => Ok(Self::Valuation),
            "follow_up" => Ok(Self::FollowUp),
            other => Err(DomainError::UnknownActivityKind(other.to_string())),
        }
    }
}

/// Immutable history entry for a property. An activity without a completion
/// timestamp is still open and contributes nothing to recency signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Workflow status of a match, owned by the CRM layer. Only `Proposed`
/// matches still count as pending demand signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Proposed,
    Interested,
    Rejected,
    Concluded,
}

/// The slice of a match record the urgency classifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMatch {
    pub total_score: u8,
    pub status: MatchStatus,
}

/// Priority level assigned to a property, lowest attention need first.
/// The numeric score is what the CRUD layer persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Sold,
    New,
    Optimal,
    Monitor,
    Warning,
    Urgent,
}

impl UrgencyLevel {
    pub const fn score(self) -> u8 {
        match self {
            Self::Sold => 0,
            Self::New => 1,
            Self::Optimal => 2,
            Self::Monitor => 3,
            Self::Warning => 4,
            Self::Urgent => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sold => "Sold",
            Self::New => "New",
            Self::Optimal => "Optimal",
            Self::Monitor => "Monitor",
            Self::Warning => "Warning",
            Self::Urgent => "Urgent",
        }
    }
}
