//! Left-to-right UTF-16 decoding.
//!
//! [`Scalars`] walks a run of code units and yields one item per Unicode
//! scalar value:
//!
//! - A unit outside `0xD800..=0xDFFF` decodes to itself.
//! - A high surrogate immediately followed by a low surrogate decodes to one
//!   supplementary-plane scalar (`U+10000..=U+10FFFF`) and consumes both.
//! - Any other surrogate yields `Err(MalformedInput)` and consumes exactly
//!   that one unit, so a high surrogate followed by a non-low unit leaves the
//!   follower to be decoded on its own.
//!
//! Every item consumes at least one unit, so a view of N units yields at most
//! N items and the iterator always terminates.
use core::iter::FusedIterator;

use crate::error::MalformedInput;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Iterator over the scalar values of a UTF-16 code-unit run.
///
/// Created by [`CodeUnitView::scalars`](crate::CodeUnitView::scalars).
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Scalars<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }

    /// Index of the next code unit to be decoded.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Scalars<'_> {
    type Item = Result<char, MalformedInput>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.pos;
        let unit = *self.units.get(index)?;
        self.pos += 1;

        let scalar = if HIGH_SURROGATES.contains(&unit) {
            match self.units.get(self.pos) {
                Some(&low) if LOW_SURROGATES.contains(&low) => {
                    self.pos += 1;
                    0x1_0000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
                }
                _ => return Some(Err(MalformedInput::new(index, unit))),
            }
        } else {
            u32::from(unit)
        };

        // Lone low surrogates are the only values rejected here.
        Some(char::from_u32(scalar).ok_or(MalformedInput::new(index, unit)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Scalars<'_> {}
