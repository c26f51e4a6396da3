use core::{
    iter::FusedIterator,
    ops::{Range, RangeFrom, RangeFull, RangeTo},
};

use crate::error::{Error, Result};

/// Extended slice description with optional, possibly negative, bounds and step.
///
/// Negative bounds count from the end of the array, missing bounds select up to the matching end,
/// and a negative step walks the array backwards. Bounds outside of the array are clamped, never an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SliceRange {
    pub start: Option<isize>,
    pub stop:  Option<isize>,
    pub step:  Option<isize>,
}

impl SliceRange {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Range selecting every element, front to back.
    pub const fn full() -> Self {
        Self { start: None, stop: None, step: None }
    }

    /// Replace the step of the range.
    pub const fn step_by(self, step: isize) -> Self {
        Self { step: Some(step), ..self }
    }

    /// Resolve the range against an array of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroSliceStep` when the step is 0.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroSliceStep);
        }

        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(bound) if bound < 0 => bound.saturating_add(len).max(lower),
            Some(bound) => bound.min(upper),
        };

        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };

        let remaining = if step < 0 && stop < start {
            (start - stop - 1) as usize / step.unsigned_abs() + 1
        } else if step > 0 && start < stop {
            (stop - start - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        };

        Ok(SliceIndices { next: start, step, remaining })
    }
}

impl From<Range<isize>> for SliceRange {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceRange {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceRange {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for SliceRange {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<(Option<isize>, Option<isize>, Option<isize>)> for SliceRange {
    fn from((start, stop, step): (Option<isize>, Option<isize>, Option<isize>)) -> Self {
        Self::new(start, stop, step)
    }
}

/// Iterator over the positions a [`SliceRange`] selects in an array of a given length.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SliceIndices {
    next:      isize,
    step:      isize,
    remaining: usize,
}

impl SliceIndices {
    /// Position the iterator yields next, when it is not empty.
    /// For a step of 1 this is also the insertion point of the selection.
    pub fn start(&self) -> usize {
        self.next.max(0) as usize
    }

    pub fn step(&self) -> isize {
        self.step
    }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.next as usize;
        self.next = self.next.wrapping_add(self.step);
        self.remaining -= 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}
impl FusedIterator for SliceIndices {}
