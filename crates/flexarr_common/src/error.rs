use core::{alloc::Layout, fmt};

/// Error returned by the fallible container operations
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Index resolved outside of `[0, len)`, `index` is the index as passed in
    IndexOutOfRange { index: isize, len: usize },
    /// No element compared equal to the requested value
    ValueNotFound,
    /// Resize requested below the current length, this is a logic bug in the container
    InvalidCapacity { requested: usize, len: usize },
    /// Growth factor is too small to ever grow the backing store
    InvalidGrowthFactor(usize),
    /// Requested capacity does not fit in `isize::MAX` bytes
    CapacityOverflow,
    /// The allocator could not provide a block with the given layout
    AllocError(Layout),
    /// A slice was requested with a step of zero
    ZeroSliceStep,
    /// Extended slice assignment with a different number of values than selected slots
    SliceLengthMismatch { expected: usize, found: usize },
    /// Two elements did not have an order relative to each other
    NotComparable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len }           => f.write_fmt(format_args!("Index out of range: index {index} for length {len}")),
            Error::ValueNotFound                            => f.write_str("Value not found"),
            Error::InvalidCapacity { requested, len }       => f.write_fmt(format_args!("Invalid capacity {requested}, length is {len}")),
            Error::InvalidGrowthFactor(factor)              => f.write_fmt(format_args!("Invalid growth factor {factor}, needs to be at least 2")),
            Error::CapacityOverflow                         => f.write_str("Capacity overflow"),
            Error::AllocError(layout)                       => f.write_fmt(format_args!("Failed to allocate {} bytes (align {})", layout.size(), layout.align())),
            Error::ZeroSliceStep                            => f.write_str("Slice step cannot be zero"),
            Error::SliceLengthMismatch { expected, found }  => f.write_fmt(format_args!("Attempt to assign a sequence of size {found} to an extended slice of size {expected}")),
            Error::NotComparable                            => f.write_str("Elements are not comparable"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
