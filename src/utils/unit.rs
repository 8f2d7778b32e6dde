use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UnitError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mass,
    Volume,
    Count,
    /// Dimension of an unrecognized unit. Never equal to a real dimension
    /// for the purposes of [`same_dimension`].
    Unknown,
}

impl Dimension {
    pub fn of(unit: Option<Unit>) -> Self {
        unit.map_or(Dimension::Unknown, |u| u.dimension())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    L,
    Ml,
    Unit,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Kg, Unit::G, Unit::L, Unit::Ml, Unit::Unit];

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Kg | Unit::G => Dimension::Mass,
            Unit::L | Unit::Ml => Dimension::Volume,
            Unit::Unit => Dimension::Count,
        }
    }

    /// Factor converting one of this unit into the base unit of its
    /// dimension (kilogram, liter or count).
    pub fn to_base_factor(&self) -> f64 {
        match self {
            Unit::Kg => 1.0,
            Unit::G => 0.001,
            Unit::L => 1.0,
            Unit::Ml => 0.001,
            Unit::Unit => 1.0,
        }
    }

    pub fn amount_in_base(&self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        amount * self.to_base_factor()
    }

    /// Parses a form tag, treating anything unrecognized (including the
    /// explicit `none` marker) as no unit.
    pub fn from_tag(tag: &str) -> Option<Unit> {
        tag.parse().ok()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_str = match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Unit => "unit",
        };
        write!(f, "{unit_str}")
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            "unit" => Ok(Unit::Unit),
            other => Err(UnitError::InvalidUnit(other.to_string())),
        }
    }
}

pub fn to_base(amount: f64, unit: Option<Unit>) -> f64 {
    unit.map_or(0.0, |u| u.amount_in_base(amount))
}

pub fn same_dimension(a: Option<Unit>, b: Option<Unit>) -> bool {
    let (dim_a, dim_b) = (Dimension::of(a), Dimension::of(b));
    dim_a == dim_b && dim_a != Dimension::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_lookup() {
        assert_eq!(Unit::Kg.dimension(), Dimension::Mass);
        assert_eq!(Unit::G.dimension(), Dimension::Mass);
        assert_eq!(Unit::L.dimension(), Dimension::Volume);
        assert_eq!(Unit::Ml.dimension(), Dimension::Volume);
        assert_eq!(Unit::Unit.dimension(), Dimension::Count);
        assert_eq!(Dimension::of(None), Dimension::Unknown);
    }

    #[test]
    fn test_same_dimension_reflexive_and_symmetric() {
        for a in Unit::ALL {
            assert!(same_dimension(Some(a), Some(a)));
            for b in Unit::ALL {
                assert_eq!(
                    same_dimension(Some(a), Some(b)),
                    same_dimension(Some(b), Some(a))
                );
            }
        }
        assert!(same_dimension(Some(Unit::Kg), Some(Unit::G)));
        assert!(!same_dimension(Some(Unit::Kg), Some(Unit::L)));
        assert!(!same_dimension(Some(Unit::Ml), Some(Unit::Unit)));
    }

    #[test]
    fn test_unknown_unit_matches_nothing() {
        assert!(!same_dimension(None, None));
        for u in Unit::ALL {
            assert!(!same_dimension(None, Some(u)));
            assert!(!same_dimension(Some(u), None));
        }
    }

    #[test]
    fn test_to_base_is_linear() {
        for u in Unit::ALL {
            for q in [0.5, 1.0, 3.0, 250.0] {
                assert_eq!(to_base(q, Some(u)), q * u.to_base_factor());
            }
        }
        assert!((to_base(500.0, Some(Unit::G)) - 0.5).abs() < 1e-12);
        assert!((to_base(250.0, Some(Unit::Ml)) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_to_base_absent_magnitudes() {
        for u in Unit::ALL {
            assert_eq!(to_base(0.0, Some(u)), 0.0);
            assert_eq!(to_base(-4.0, Some(u)), 0.0);
            assert_eq!(to_base(f64::NAN, Some(u)), 0.0);
        }
        assert_eq!(to_base(3.0, None), 0.0);
    }

    #[test]
    fn test_unit_parse_and_display() {
        for u in Unit::ALL {
            assert_eq!(u.to_string().parse::<Unit>(), Ok(u));
        }
        assert_eq!(" KG ".parse::<Unit>(), Ok(Unit::Kg));
        assert_eq!(
            "lb".parse::<Unit>(),
            Err(UnitError::InvalidUnit("lb".to_string()))
        );
        assert_eq!(Unit::from_tag("none"), None);
    }
}
