//! The SLO state enum.

use jsonmodel::WireEnum;

/// State of an SLO against its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SloState {
    Breached,
    Warning,
    Ok,
    NoData,
    /// A wire value outside the declared domain, retained as-is.
    Unrecognized(String),
}

impl WireEnum for SloState {
    type Wire = String;

    fn from_wire(value: String) -> Self {
        match value.as_str() {
            "breached" => Self::Breached,
            "warning" => Self::Warning,
            "ok" => Self::Ok,
            "no_data" => Self::NoData,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> String {
        match self {
            Self::Breached => "breached".to_string(),
            Self::Warning => "warning".to_string(),
            Self::Ok => "ok".to_string(),
            Self::NoData => "no_data".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_members_roundtrip() {
        for wire in ["breached", "warning", "ok", "no_data"] {
            let state = SloState::from_wire(wire.to_string());
            assert!(state.is_valid(), "{wire}");
            assert_eq!(state.to_wire(), wire);
        }
    }

    #[test]
    fn unknown_member_is_retained_but_invalid() {
        let state = SloState::from_wire("degraded".to_string());
        assert_eq!(state, SloState::Unrecognized("degraded".to_string()));
        assert!(!state.is_valid());
        assert_eq!(state.to_wire(), "degraded");
    }
}
