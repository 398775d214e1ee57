//! [`WireEnum`] — closed scalar domains with forward-compatible decode.

use crate::FieldValue;

/// A closed set of allowed wire literals (strings or integers).
///
/// Decoding never fails: wire values outside the declared domain are
/// retained in the implementor's `Unrecognized` variant and reported by
/// [`WireEnum::is_valid`]. A plain model holding an invalid member demotes
/// itself to its raw form, which is how new members introduced by the
/// service are tolerated without ever re-encoding a value the client
/// cannot vouch for.
pub trait WireEnum: Sized {
    /// The wire representation of this domain.
    type Wire: FieldValue;

    /// Total conversion from the wire value.
    fn from_wire(value: Self::Wire) -> Self;

    /// The wire value this member encodes as.
    fn to_wire(&self) -> Self::Wire;

    /// Whether this member belongs to the declared domain.
    fn is_valid(&self) -> bool;
}
