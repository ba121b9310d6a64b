//! Ledger domain types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Goods received; increases the product balance.
    In,
    /// Goods issued; decreases the product balance.
    Out,
}

impl MovementType {
    /// Returns the string representation of the movement type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Parses a movement type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A movement as submitted by a caller, before it is posted.
///
/// The draft is validated by [`super::LedgerService`] and only then turned
/// into a ledger row plus a balance adjustment, in one unit of work.
#[derive(Debug, Clone)]
pub struct MovementDraft {
    /// The product whose balance the movement affects.
    pub product_id: Uuid,
    /// Direction of the movement.
    pub movement_type: MovementType,
    /// Quantity moved. Must be positive; the direction carries the sign.
    pub quantity: i32,
    /// Reason for the movement (e.g. "Purchase", "Sale", "Damaged").
    pub reason: String,
    /// Optional document reference (PO number, invoice, ...).
    pub reference: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Optional name of the person recording the movement.
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_as_str() {
        assert_eq!(MovementType::In.as_str(), "in");
        assert_eq!(MovementType::Out.as_str(), "out");
    }

    #[test]
    fn test_movement_type_parse() {
        assert_eq!(MovementType::parse("in"), Some(MovementType::In));
        assert_eq!(MovementType::parse("OUT"), Some(MovementType::Out));
        assert_eq!(MovementType::parse("adjustment"), None);
        assert_eq!(MovementType::parse(""), None);
    }

    #[test]
    fn test_movement_type_display() {
        assert_eq!(format!("{}", MovementType::In), "in");
        assert_eq!(format!("{}", MovementType::Out), "out");
    }
}
