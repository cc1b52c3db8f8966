//! Error types for provider-driven calendar searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;

/// Errors from solar-term search, lunar conversion and pillar assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Lookup error from the calendar primitives.
    Saju(SajuError),
    /// The lunar calendar provider could not convert a date.
    CalendarConversion(String),
    /// A bounded scan ended without finding the boundary.
    NoConvergence(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saju(e) => write!(f, "saju error: {e}"),
            Self::CalendarConversion(msg) => write!(f, "calendar conversion failed: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Saju(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SajuError> for SearchError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_saju_error() {
        let e: SearchError = SajuError::NotFound("x".into()).into();
        assert!(matches!(e, SearchError::Saju(_)));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "saju error: not found: x");
    }

    #[test]
    fn display_variants() {
        let e = SearchError::NoConvergence("next node term");
        assert_eq!(e.to_string(), "no convergence: next node term");
        let e = SearchError::CalendarConversion("leap month".into());
        assert!(e.to_string().contains("leap month"));
    }
}
