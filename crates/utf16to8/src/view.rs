use alloc::vec::Vec;

use crate::scalars::Scalars;

/// A borrowed, read-only run of UTF-16 code units with an explicit length.
///
/// The view never owns the storage it points at and never outlives it; the
/// host that lent the units keeps full control over their lifecycle. Copying
/// a view copies the pointer and length only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeUnitView<'a> {
    units: &'a [u16],
}

impl<'a> CodeUnitView<'a> {
    /// Creates a view over `units`.
    #[must_use]
    pub const fn new(units: &'a [u16]) -> Self {
        Self { units }
    }

    /// Creates a view from a host-supplied pointer and length.
    ///
    /// A zero `len` yields the empty view without touching `ptr`, so hosts
    /// that hand out a null pointer for empty text are accepted.
    ///
    /// # Safety
    ///
    /// When `len` is non-zero, `ptr` must be non-null, aligned for `u16`, and
    /// valid for reads of `len` consecutive code units. The units must not be
    /// mutated for the lifetime `'a`.
    #[must_use]
    pub unsafe fn from_raw_parts(ptr: *const u16, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        // SAFETY: upheld by the caller per the contract above.
        let units = unsafe { core::slice::from_raw_parts(ptr, len) };
        Self { units }
    }

    /// Number of code units in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the view holds no code units.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The underlying code units.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [u16] {
        self.units
    }

    /// Decodes the view into Unicode scalar values, left to right.
    #[must_use]
    pub fn scalars(&self) -> Scalars<'a> {
        Scalars::new(self.units)
    }
}

impl<'a> From<&'a [u16]> for CodeUnitView<'a> {
    fn from(units: &'a [u16]) -> Self {
        Self::new(units)
    }
}

impl<'a, const N: usize> From<&'a [u16; N]> for CodeUnitView<'a> {
    fn from(units: &'a [u16; N]) -> Self {
        Self::new(units)
    }
}

impl<'a> From<&'a Vec<u16>> for CodeUnitView<'a> {
    fn from(units: &'a Vec<u16>) -> Self {
        Self::new(units)
    }
}
