//! The metric intake type enum.

use jsonmodel::WireEnum;

/// The type of a submitted metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricIntakeType {
    Unspecified,
    Count,
    Rate,
    Gauge,
    /// A wire value outside the declared domain, retained as-is.
    Unrecognized(i64),
}

impl WireEnum for MetricIntakeType {
    type Wire = i64;

    fn from_wire(value: i64) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Count,
            2 => Self::Rate,
            3 => Self::Gauge,
            _ => Self::Unrecognized(value),
        }
    }

    fn to_wire(&self) -> i64 {
        match self {
            Self::Unspecified => 0,
            Self::Count => 1,
            Self::Rate => 2,
            Self::Gauge => 3,
            Self::Unrecognized(raw) => *raw,
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
    fn wire_values_roundtrip() {
        for n in 0..4 {
            let t = MetricIntakeType::from_wire(n);
            assert!(t.is_valid());
            assert_eq!(t.to_wire(), n);
        }
    }

    #[test]
    fn unknown_values_are_retained_but_invalid() {
        let t = MetricIntakeType::from_wire(9);
        assert_eq!(t, MetricIntakeType::Unrecognized(9));
        assert!(!t.is_valid());
        assert_eq!(t.to_wire(), 9);
    }
}
