//! The matching & prioritization engine: pure computation over entity
//! snapshots supplied by the CRUD layer. No storage, no network I/O.

pub mod domain;
pub mod import;
pub mod matching;
pub mod rollup;
pub mod urgency;

#[cfg(test)]
mod tests;

pub use domain::{
    Activity, ActivityKind, Condition, ContractType, Coordinates, DomainError, EnergyClass,
    MatchStatus, PendingMatch, Property, PropertyKind, PropertyStatus, Request, UrgencyLevel,
};
pub use import::{PortfolioImportError, PortfolioSnapshot};
pub use matching::{haversine_km, MatchEngine, MatchScore, ScoreWeights, WeightsError};
pub use rollup::{rollup_building, BuildingRollup};
pub use urgency::{classify_urgency, UrgencyConfig};
