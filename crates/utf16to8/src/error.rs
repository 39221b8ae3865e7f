use core::fmt;

use thiserror::Error;

/// An ill-formed UTF-16 sequence: a surrogate code unit that is not part of
/// a high/low pair.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("unpaired {kind} surrogate {unit:#06X} at code unit {index}")]
pub struct MalformedInput {
    index: usize,
    unit: u16,
    kind: SurrogateKind,
}

impl MalformedInput {
    pub(crate) fn new(index: usize, unit: u16) -> Self {
        let kind = if unit < 0xDC00 {
            SurrogateKind::High
        } else {
            SurrogateKind::Low
        };
        Self { index, unit, kind }
    }

    /// Position of the offending code unit within the view.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The offending code unit.
    #[must_use]
    pub fn unit(&self) -> u16 {
        self.unit
    }

    /// Which half of a surrogate pair the offending code unit is.
    #[must_use]
    pub fn kind(&self) -> SurrogateKind {
        self.kind
    }
}

/// The two halves of a UTF-16 surrogate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurrogateKind {
    /// `0xD800..=0xDBFF`, must be followed by a low surrogate.
    High,
    /// `0xDC00..=0xDFFF`, must be preceded by a high surrogate.
    Low,
}

impl fmt::Display for SurrogateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurrogateKind::High => f.write_str("high"),
            SurrogateKind::Low => f.write_str("low"),
        }
    }
}
