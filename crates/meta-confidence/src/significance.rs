//! Conventional significance markers for p-values

use std::fmt;

/// Star notation for a two-sided p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceMarker {
    /// p < 0.001
    ThreeStars,
    /// p < 0.01
    TwoStars,
    /// p < 0.05
    OneStar,
    /// p ≥ 0.05
    NotSignificant,
}

impl SignificanceMarker {
    /// Classify a p-value
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < 0.001 {
            Self::ThreeStars
        } else if p_value < 0.01 {
            Self::TwoStars
        } else if p_value < 0.05 {
            Self::OneStar
        } else {
            Self::NotSignificant
        }
    }

    /// Whether the marker denotes significance at the 5% level
    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::NotSignificant)
    }
}

impl fmt::Display for SignificanceMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ThreeStars => "***",
            Self::TwoStars => "**",
            Self::OneStar => "*",
            Self::NotSignificant => "ns",
        };
        write!(f, "{}", s)
    }
}
