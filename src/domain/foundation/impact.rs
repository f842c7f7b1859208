//! Impact value object: direction of preference for a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TopsisError;

/// Whether higher (`+`) or lower (`-`) values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Maximize,
    Minimize,
}

impl Impact {
    /// Parses an impact symbol. Only the exact tokens `+` and `-` are accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Impact::Maximize),
            "-" => Some(Impact::Minimize),
            _ => None,
        }
    }

    /// Returns the symbol used in impact specifications.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Maximize => "+",
            Impact::Minimize => "-",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Maximize => Impact::Minimize,
            Impact::Minimize => Impact::Maximize,
        }
    }

    /// Orders two weighted values as `(best, worst)` for this direction.
    pub fn order(&self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Impact::Maximize => (max, min),
            Impact::Minimize => (min, max),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Impact::from_symbol(s).ok_or_else(|| {
            TopsisError::value("Impacts must be either '+' or '-'").with_detail("token", s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn from_symbol_accepts_plus_and_minus() {
        assert_eq!(Impact::from_symbol("+"), Some(Impact::Maximize));
        assert_eq!(Impact::from_symbol("-"), Some(Impact::Minimize));
    }

    #[test]
    fn from_symbol_is_exact() {
        assert_eq!(Impact::from_symbol(" +"), None);
        assert_eq!(Impact::from_symbol("++"), None);
        assert_eq!(Impact::from_symbol("max"), None);
        assert_eq!(Impact::from_symbol(""), None);
    }

    #[test]
    fn parse_failure_is_value_error() {
        let err = "x".parse::<Impact>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
        assert_eq!(err.details.get("token"), Some(&"x".to_string()));
    }

    #[test]
    fn symbol_round_trips_through_display() {
        for impact in [Impact::Maximize, Impact::Minimize] {
            let parsed: Impact = impact.to_string().parse().unwrap();
            assert_eq!(parsed, impact);
        }
    }

    #[test]
    fn flipped_swaps_direction() {
        assert_eq!(Impact::Maximize.flipped(), Impact::Minimize);
        assert_eq!(Impact::Minimize.flipped(), Impact::Maximize);
    }

    #[test]
    fn order_picks_best_by_direction() {
        assert_eq!(Impact::Maximize.order(1.0, 4.0), (4.0, 1.0));
        assert_eq!(Impact::Minimize.order(1.0, 4.0), (1.0, 4.0));
    }

    #[test]
    fn impact_serializes_to_json() {
        let json = serde_json::to_string(&Impact::Minimize).unwrap();
        assert_eq!(json, "\"Minimize\"");
    }
}
