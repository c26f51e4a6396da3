use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{self, Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

use flexarr_logging::{log_error, LogCategory};
use scopeguard::guard;
use static_assertions::assert_impl_all;

use crate::error::{Error, Result};
use super::{
    imp::array::{handle_error, RawArray},
    impl_slice_partial_eq_generic,
    GrowthFactor,
    SliceRange,
};

mod into_iter;


pub use into_iter::IntoIter;

const LOG_CAT: LogCategory = LogCategory::new("DynArr");

cfg_if::cfg_if! {
    if #[cfg(feature = "log_resizes")] {
        fn log_resize(old_capacity: usize, new_capacity: usize, len: usize) {
            flexarr_logging::log_verbose!(LOG_CAT, "Resized backing store from {old_capacity} to {new_capacity} slots, holding {len} elements");
        }
    } else {
        #[inline(always)]
        fn log_resize(_old_capacity: usize, _new_capacity: usize, _len: usize) {}
    }
}

/// A contiguous growable array type with list-like semantics, also known as a dynamic array, or DynArr.
///
/// Dynamic arrays have *O*(1) indexing, amortized *O*(1) append (to the end), and amortized *O*(1) pop (from the back).
///
/// Unlike `Vec`, positions are signed: a negative index counts from the end, so `-1` is the last element.
/// Fallible operations report an [`Error`] instead of panicking.
///
/// # Examples
///
/// ```
/// # use flexarr_common::{collections::DynArr, dynarr};
/// let mut arr = DynArr::new();
/// arr.append(1);
/// arr.append(2);
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.get(-1), Ok(&2));
///
/// arr.set(0, 7).unwrap();
/// arr.extend([1, 2, 3]);
/// assert_eq!(arr, [7, 2, 1, 2, 3]);
///
/// let arr2 = dynarr![7, 2, 1, 2, 3];
/// assert_eq!(arr, arr2);
/// ```
///
/// # Capacity and reallocation
///
/// The backing store always has room for at least 1 element.
/// When an append finds it full, a new store with `capacity * growth_factor` slots is allocated and the elements are moved over.
/// When a removal leaves the store with a load of at most `1 / growth_factor²`, it is replaced by one with `capacity / growth_factor` slots,
/// until the capacity reaches the growth factor.
///
/// The backing store is never resized in place, every resize allocates a new store, moves the elements, and frees the old store.
pub struct DynArr<T> {
    arr:    RawArray<T>,
    len:    usize,
    growth: GrowthFactor,
}

assert_impl_all!(DynArr<u32>: Send, Sync, Clone, Default);

impl<T> DynArr<T> {
    /// Constructs a new, empty `DynArr<T>`, with room for a single element and the default growth factor.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_growth(GrowthFactor::DEFAULT)
    }

    /// Constructs a new, empty `DynArr<T>` with the given growth factor.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGrowthFactor` if `factor` is smaller than 2.
    ///
    /// # Panics
    ///
    /// The factor has no upper bound, but the first grow panics if `factor` slots would exceed `isize::MAX` _bytes_.
    pub fn with_growth_factor(factor: usize) -> Result<Self> {
        Ok(Self::with_growth(GrowthFactor::new(factor)?))
    }

    /// Constructs a new, empty `DynArr<T>` with the given growth factor.
    #[must_use]
    pub fn with_growth(growth: GrowthFactor) -> Self {
        Self::with_capacity_and_growth(1, growth)
    }

    /// Constructs a new, empty `DynArr<T>` with room for at least `capacity` elements and the default growth factor.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_growth(capacity, GrowthFactor::DEFAULT)
    }

    /// Constructs a new, empty `DynArr<T>` with room for at least `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds `isize::MAX` _bytes_, aborts if the allocation fails.
    #[must_use]
    pub fn with_capacity_and_growth(capacity: usize, growth: GrowthFactor) -> Self {
        let arr = RawArray::try_with_capacity(capacity.max(1)).unwrap_or_else(|err| handle_error(err));
        Self { arr, len: 0, growth }
    }

    /// Returns the number of elements the dynamic array can hold without resizing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arr.capacity()
    }

    #[inline]
    pub fn growth_factor(&self) -> usize {
        self.growth.get()
    }

    /// Returns the number of elements in the dynamic array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts a slice containing the entire dynamic array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are always initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire dynamic array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are always initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.arr.ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.arr.ptr()
    }

    //--------------------------------------------------------------

    /// Returns a reference to the element at `index`, negative indices count from the back.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` does not resolve to an element.
    pub fn get(&self, index: isize) -> Result<&T> {
        let idx = self.resolve_index(index)?;
        Ok(&self.as_slice()[idx])
    }

    /// Returns a mutable reference to the element at `index`, negative indices count from the back.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` does not resolve to an element.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let idx = self.resolve_index(index)?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Replaces the element at `index`, dropping the previous element.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` does not resolve to an element, `value` is dropped in that case.
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends an element to the back of the dynamic array.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    pub fn append(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow();
        }
        // SAFETY: slot `len` is in bounds and uninitialized
        unsafe { ptr::write(self.as_mut_ptr().add(len), value) };
        self.len = len + 1;
    }

    /// Inserts an element before `index`, shifting all elements after it to the right.
    ///
    /// Negative indices count from the back, and out of range indices are clamped,
    /// so inserting at `-1` places the element before the last element, and any index past the end appends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flexarr_common::dynarr;
    /// let mut arr = dynarr![0, 1, 2];
    /// arr.insert(-1, 5);
    /// arr.insert(100, 6);
    /// arr.insert(-100, 7);
    /// assert_eq!(arr, [7, 0, 1, 5, 2, 6]);
    /// ```
    pub fn insert(&mut self, index: isize, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow();
        }

        let idx = self.clamp_index(index);
        // SAFETY: `idx <= len < capacity`, so the shifted range stays in bounds
        unsafe {
            let ptr = self.as_mut_ptr().add(idx);
            if idx < len {
                ptr::copy(ptr, ptr.add(1), len - idx);
            }
            ptr::write(ptr, value);
        }
        self.len = len + 1;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if the dynamic array is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            Err(Error::IndexOutOfRange { index: -1, len: 0 })
        } else {
            Ok(self.remove_at(self.len - 1))
        }
    }

    /// Removes and returns the element at `index`, shifting all elements after it to the left.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` does not resolve to an element.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let idx = self.resolve_index(index)?;
        Ok(self.remove_at(idx))
    }

    /// Removes the element at `index`, shifting all elements after it to the left.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` does not resolve to an element.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(drop)
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValueNotFound` if no element is equal to `value`.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Result<T> where
        T: PartialEq<Q>
    {
        let idx = self.iter().position(|elem| elem == value).ok_or(Error::ValueNotFound)?;
        Ok(self.remove_at(idx))
    }

    /// Removes all elements, and returns to a backing store with room for a single element.
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // SAFETY: `len` is reset first, so a panicking `drop` can't cause a double drop
        unsafe {
            self.len = 0;
            ptr::drop_in_place(elems);
        }

        if self.capacity() != 1 {
            match self.resize(1) {
                Ok(()) | Err(Error::AllocError(_)) => {},
                Err(err) => handle_error(err),
            }
        }
    }

    /// Shortens the dynamic array, keeping the first `len` elements and dropping the rest.
    ///
    /// Has no effect if `len` is greater or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        // SAFETY: slots `len..self.len` are initialized, and are forgotten before being dropped
        unsafe {
            let remaining = self.len - len;
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), remaining);
            self.len = len;
            ptr::drop_in_place(tail);
        }
        self.shrink_to_load();
    }

    /// Splits the dynamic array in two at the given index.
    ///
    /// Returns a newly allocated dynamic array containing the elements `[at, len)`, with the same growth factor.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    #[must_use = "use `.truncate()` if you don't need the other half"]
    pub fn split_off(&mut self, at: usize) -> Self {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(at: usize, len: usize) -> ! {
            panic!("`at` split index (is {at}) should be <= len (is {len})");
        }

        if at > self.len {
            assert_failed(at, self.len);
        }

        let other_len = self.len - at;
        let mut other = Self::with_growth(self.growth);
        other.reserve_for(other_len);

        // SAFETY: the elements are moved, `self` forgets them by reducing its length
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr().add(at), other.as_mut_ptr(), other_len);
            self.len = at;
            other.len = other_len;
        }
        self.shrink_to_load();
        other
    }

    /// Retains only the elements specified by the predicate, preserving their order.
    pub fn retain<F>(&mut self, mut f: F) where
        F: FnMut(&T) -> bool
    {
        let len = self.len;
        let mut kept = 0;
        for idx in 0..len {
            if f(&self.as_slice()[idx]) {
                self.as_mut_slice().swap(kept, idx);
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    //--------------------------------------------------------------

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValueNotFound` if no element is equal to `value`.
    pub fn index_of<Q: ?Sized>(&self, value: &Q) -> Result<usize> where
        T: PartialEq<Q>
    {
        self.index_of_within(value, None, None)
    }

    /// Returns the position of the first element equal to `value` in `[start, end)`.
    ///
    /// The bounds follow the same rules as a slice with step 1: negative bounds count from the back, and are clamped to the array.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValueNotFound` if no element in the range is equal to `value`.
    pub fn index_of_within<Q: ?Sized>(&self, value: &Q, start: Option<isize>, end: Option<isize>) -> Result<usize> where
        T: PartialEq<Q>
    {
        let mut indices = SliceRange::new(start, end, None).indices(self.len)?;
        indices.find(|&idx| &self.as_slice()[idx] == value).ok_or(Error::ValueNotFound)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count<Q: ?Sized>(&self, value: &Q) -> usize where
        T: PartialEq<Q>
    {
        self.iter().filter(|elem| *elem == value).count()
    }

    /// Checks if any element is equal to `value`.
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool where
        T: PartialEq<Q>
    {
        self.iter().any(|elem| elem == value)
    }

    /// Stably sorts the dynamic array using the partial order of the elements, in descending order if `reverse` is set.
    ///
    /// Equal elements keep their relative order, also when sorting in reverse.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotComparable` if 2 elements have no defined order, the dynamic array is left unmodified in that case.
    pub fn try_sort(&mut self, reverse: bool) -> Result<()> where
        T: PartialOrd
    {
        let order = sorted_order(self.as_slice(), reverse)?;
        self.apply_order(order);
        Ok(())
    }

    /// Stably sorts the dynamic array by the key calculated for each element, in descending order if `reverse` is set.
    ///
    /// The key function is called exactly once per element.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotComparable` if 2 keys have no defined order, the dynamic array is left unmodified in that case.
    pub fn sort_keyed<K, F>(&mut self, key: F, reverse: bool) -> Result<()> where
        K: PartialOrd,
        F: FnMut(&T) -> K
    {
        let keys: DynArr<K> = self.iter().map(key).collect();
        let order = sorted_order(&keys, reverse)?;
        self.apply_order(order);
        Ok(())
    }

    //--------------------------------------------------------------

    fn resolve_index(&self, index: isize) -> Result<usize> {
        let resolved = if index < 0 { index + self.len as isize } else { index };
        if resolved < 0 || resolved as usize >= self.len {
            Err(Error::IndexOutOfRange { index, len: self.len })
        } else {
            Ok(resolved as usize)
        }
    }

    fn clamp_index(&self, index: isize) -> usize {
        if index < 0 {
            (index + self.len as isize).max(0) as usize
        } else {
            (index as usize).min(self.len)
        }
    }

    /// Move the elements to a new backing store with exactly `new_capacity` slots.
    fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 || new_capacity < self.len {
            log_error!(LOG_CAT, "Cannot resize backing store to {new_capacity} slots while holding {} elements", self.len);
            return Err(Error::InvalidCapacity { requested: new_capacity, len: self.len });
        }

        let new_arr = RawArray::try_with_capacity(new_capacity)?;
        // SAFETY: both stores have room for `len` elements and don't overlap.
        //         The elements are moved, so the old store is freed without dropping them.
        unsafe { ptr::copy_nonoverlapping(self.arr.ptr(), new_arr.ptr(), self.len) };
        let old_arr = mem::replace(&mut self.arr, new_arr);

        log_resize(old_arr.capacity(), new_capacity, self.len);
        Ok(())
    }

    #[cold]
    fn grow(&mut self) {
        let res = self.growth.grow(self.capacity()).and_then(|new_cap| self.resize(new_cap));
        if let Err(err) = res {
            handle_error(err);
        }
    }

    /// Grow in steps of the growth factor until there is room for `min_capacity` elements, then resize once.
    fn reserve_for(&mut self, min_capacity: usize) {
        let mut new_cap = self.capacity();
        while new_cap < min_capacity {
            new_cap = match self.growth.grow(new_cap) {
                Ok(new_cap) => new_cap,
                Err(err) => handle_error(err),
            };
        }

        if new_cap != self.capacity() {
            if let Err(err) = self.resize(new_cap) {
                handle_error(err);
            }
        }
    }

    fn shrink_to_load(&mut self) {
        while self.growth.should_shrink(self.len, self.capacity()) {
            match self.resize(self.growth.shrink(self.capacity())) {
                Ok(()) => {},
                // A larger store than needed is still a valid store
                Err(Error::AllocError(_)) => break,
                Err(err) => handle_error(err),
            }
        }
    }

    /// Remove the element at `idx`, which needs to be in bounds.
    fn remove_at(&mut self, idx: usize) -> T {
        let len = self.len;
        // SAFETY: `idx < len`, the value is read out before its slot is overwritten
        let value = unsafe {
            let ptr = self.as_mut_ptr().add(idx);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, len - idx - 1);
            value
        };
        self.len = len - 1;
        self.shrink_to_load();
        value
    }

    /// Permute the elements, so the element at `order[i]` ends up at `i`.
    fn apply_order(&mut self, mut order: DynArr<usize>) {
        for start in 0..order.len() {
            if order[start] == start {
                continue;
            }

            let mut cur = start;
            loop {
                let next = order[cur];
                order[cur] = cur;
                if next == start {
                    break;
                }
                self.as_mut_slice().swap(cur, next);
                cur = next;
            }
        }
    }
}

impl<T: Ord> DynArr<T> {
    /// Stably sorts the dynamic array in ascending order.
    pub fn sort(&mut self) {
        self.as_mut_slice().sort();
    }
}

impl<T: Clone> DynArr<T> {
    /// Returns a new dynamic array with the content repeated `times` times, `times <= 0` results in an empty dynamic array.
    #[must_use]
    pub fn repeat(&self, times: isize) -> Self {
        let mut arr = self.clone();
        arr.repeat_in_place(times);
        arr
    }

    /// Repeats the content `times` times, `times <= 0` clears the dynamic array.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    pub fn repeat_in_place(&mut self, times: isize) {
        if times <= 0 {
            self.clear();
            return;
        }

        let len = self.len;
        let total = len.checked_mul(times as usize).unwrap_or_else(|| handle_error(Error::CapacityOverflow));
        self.reserve_for(total);

        // SAFETY: there is room for `total` elements, and the length only covers written slots, even when a clone panics
        unsafe {
            let base = self.as_mut_ptr();
            let mut local_len = guard(len, |local_len| self.len = local_len);
            for src in (0..len).cycle().take(total - len) {
                ptr::write(base.add(*local_len), (*base.add(src)).clone());
                *local_len += 1;
            }
        }
    }

    /// Returns a new dynamic array containing clones of the elements the range selects, with the same growth factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flexarr_common::{collections::SliceRange, dynarr};
    /// let arr = dynarr![0, 1, 2, 3, 4];
    /// assert_eq!(arr.slice(1..-1).unwrap(), [1, 2, 3]);
    /// assert_eq!(arr.slice(SliceRange::full().step_by(-2)).unwrap(), [4, 2, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroSliceStep` if the step of the range is 0.
    pub fn slice(&self, range: impl Into<SliceRange>) -> Result<Self> {
        let indices = range.into().indices(self.len)?;
        let mut arr = Self::with_growth(self.growth);
        arr.reserve_for(indices.len());
        arr.extend(indices.map(|idx| self.as_slice()[idx].clone()));
        Ok(arr)
    }

    fn extend_with(&mut self, n: usize, value: T) {
        let len = self.len;
        let total = len.checked_add(n).unwrap_or_else(|| handle_error(Error::CapacityOverflow));
        self.reserve_for(total);

        // SAFETY: there is room for `total` elements, and the length only covers written slots, even when a clone panics
        unsafe {
            let mut ptr = self.as_mut_ptr().add(len);
            let mut local_len = guard(len, |local_len| self.len = local_len);

            // Write all elements except the last one
            for _ in 1..n {
                ptr::write(ptr, value.clone());
                ptr = ptr.add(1);
                *local_len += 1;
            }

            if n > 0 {
                // We can write the last element directly without cloning needlessly
                ptr::write(ptr, value);
                *local_len += 1;
            }
        }
    }
}

impl<T> DynArr<T> {
    /// Replaces the elements the range selects with `values`.
    ///
    /// With a step of 1, the selection may be replaced by any number of values, growing or shrinking the dynamic array.
    /// With any other step, exactly one value is needed per selected element.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroSliceStep` if the step of the range is 0,
    /// or `Error::SliceLengthMismatch` if the number of values doesn't match an extended selection.
    pub fn set_slice<I>(&mut self, range: impl Into<SliceRange>, values: I) -> Result<()> where
        I: IntoIterator<Item = T>
    {
        let indices = range.into().indices(self.len)?;
        let values: DynArr<T> = values.into_iter().collect();

        if indices.step() == 1 {
            let start = indices.start();
            let tail = self.split_off(start + indices.len());
            self.truncate(start);
            self.extend(values);
            self.extend(tail);
        } else {
            if values.len() != indices.len() {
                return Err(Error::SliceLengthMismatch { expected: indices.len(), found: values.len() });
            }
            for (idx, value) in indices.zip(values) {
                self.as_mut_slice()[idx] = value;
            }
        }
        Ok(())
    }

    /// Removes the elements the range selects.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroSliceStep` if the step of the range is 0.
    pub fn delete_slice(&mut self, range: impl Into<SliceRange>) -> Result<()> {
        let indices = range.into().indices(self.len)?;
        if indices.len() == 0 {
            return Ok(());
        }

        if indices.step() == 1 {
            let start = indices.start();
            let tail = self.split_off(start + indices.len());
            self.truncate(start);
            self.extend(tail);
        } else {
            let mut doomed = from_elem(false, self.len);
            for idx in indices {
                doomed[idx] = true;
            }

            let mut idx = 0;
            self.retain(|_| {
                let keep = !doomed[idx];
                idx += 1;
                keep
            });
        }
        Ok(())
    }
}

/// Stable merge sort of the positions of `keys`, failing on the first pair of keys without an order.
fn sorted_order<K: PartialOrd>(keys: &[K], reverse: bool) -> Result<DynArr<usize>> {
    let compare = |lhs: usize, rhs: usize| -> Result<Ordering> {
        let ord = keys[lhs].partial_cmp(&keys[rhs]).ok_or(Error::NotComparable)?;
        Ok(if reverse { ord.reverse() } else { ord })
    };

    let len = keys.len();
    let mut order: DynArr<usize> = (0..len).collect();
    let mut scratch: DynArr<usize> = (0..len).collect();

    let mut width = 1;
    while width < len {
        let mut lo = 0;
        while lo < len {
            let mid = (lo + width).min(len);
            let hi = (lo + 2 * width).min(len);
            let (mut left, mut right) = (lo, mid);
            for slot in lo..hi {
                let take_left = right >= hi || (left < mid && compare(order[left], order[right])? != Ordering::Greater);
                if take_left {
                    scratch[slot] = order[left];
                    left += 1;
                } else {
                    scratch[slot] = order[right];
                    right += 1;
                }
            }
            lo = hi;
        }
        mem::swap(&mut order, &mut scratch);
        width *= 2;
    }
    Ok(order)
}

#[doc(hidden)]
pub fn from_elem<T: Clone>(elem: T, n: usize) -> DynArr<T> {
    let mut arr = DynArr::new();
    arr.extend_with(n, elem);
    arr
}

/// Creates a [`DynArr`] containing the arguments.
///
/// - Create a [`DynArr`] containing a given list of elements: `dynarr![1, 2, 3]`
/// - Create a [`DynArr`] from a given element and size: `dynarr![0; 5]`
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::collections::DynArr::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::collections::from_elem($elem, $n)
    };
    ($($val:expr),+ $(,)?) => {{
        let mut arr = $crate::collections::DynArr::with_capacity($crate::count_exprs!($($val),+));
        $( arr.append($val); )+
        arr
    }};
}

//--------------------------------------------------------------

impl<T> Deref for DynArr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArr<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArr<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<T: Clone> Clone for DynArr<T> {
    /// Shallow copy: the elements are cloned into a new backing store, with the same growth factor.
    fn clone(&self) -> Self {
        let mut arr = Self::with_growth(self.growth);
        arr.reserve_for(self.len);
        arr.extend(self.iter().cloned());
        arr
    }
}

impl<T: Hash> Hash for DynArr<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&**self, state)
    }
}

impl<T> FromIterator<T> for DynArr<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> IntoIterator for DynArr<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of the dynamic array (from start to end).
    /// The dynamic array cannot be used after calling this.
    fn into_iter(self) -> Self::IntoIter {
        let mut me = ManuallyDrop::new(self);
        let len = me.len;
        // SAFETY: `me` is never used again, so ownership of the store and its elements moves to the iterator
        let arr = unsafe { ptr::read(&me.arr) };
        me.len = 0;
        IntoIter { arr, start: 0, end: len }
    }
}

impl<'a, T> IntoIterator for &'a DynArr<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArr<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for DynArr<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Extend implementation that copies elements out of references before appending them onto the dynamic array.
impl<'a, T: Copy + 'a> Extend<&'a T> for DynArr<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.append(*value);
        }
    }
}

impl_slice_partial_eq_generic!([] DynArr<T>, DynArr<U>);
impl_slice_partial_eq_generic!([] DynArr<T>, [U]);
impl_slice_partial_eq_generic!([] DynArr<T>, &[U]);
impl_slice_partial_eq_generic!([] DynArr<T>, &mut [U]);
impl_slice_partial_eq_generic!([] DynArr<T>, Vec<U>);
impl_slice_partial_eq_generic!([] [T], DynArr<U>);
impl_slice_partial_eq_generic!([] &[T], DynArr<U>);
impl_slice_partial_eq_generic!([] Vec<T>, DynArr<U>);
impl_slice_partial_eq_generic!([const N: usize] DynArr<T>, [U; N]);
impl_slice_partial_eq_generic!([const N: usize] [T; N], DynArr<U>);

impl<T: PartialOrd> PartialOrd for DynArr<T> {
    /// Lexicographic comparison, the first unequal pair of elements decides, otherwise the shorter array is smaller.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Eq> Eq for DynArr<T> {}

impl<T: Ord> Ord for DynArr<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(&**self, &**other)
    }
}

impl<T: Clone> ops::Add<&DynArr<T>> for &DynArr<T> {
    type Output = DynArr<T>;

    /// Concatenates both dynamic arrays into a new one, with the growth factor of the left hand side.
    fn add(self, rhs: &DynArr<T>) -> DynArr<T> {
        let mut arr = DynArr::with_growth(self.growth);
        arr.reserve_for(self.len + rhs.len);
        arr.extend(self.iter().cloned());
        arr.extend(rhs.iter().cloned());
        arr
    }
}

impl<T> ops::Add for DynArr<T> {
    type Output = DynArr<T>;

    fn add(mut self, rhs: DynArr<T>) -> DynArr<T> {
        self.extend(rhs);
        self
    }
}

impl<T: Clone> ops::AddAssign<&DynArr<T>> for DynArr<T> {
    fn add_assign(&mut self, rhs: &DynArr<T>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T> ops::AddAssign for DynArr<T> {
    fn add_assign(&mut self, rhs: DynArr<T>) {
        self.extend(rhs);
    }
}

impl<T: Clone> ops::Mul<isize> for &DynArr<T> {
    type Output = DynArr<T>;

    fn mul(self, times: isize) -> DynArr<T> {
        self.repeat(times)
    }
}

impl<T: Clone> ops::Mul<isize> for DynArr<T> {
    type Output = DynArr<T>;

    fn mul(mut self, times: isize) -> DynArr<T> {
        self.repeat_in_place(times);
        self
    }
}

impl<T: Clone> ops::MulAssign<isize> for DynArr<T> {
    fn mul_assign(&mut self, times: isize) {
        self.repeat_in_place(times);
    }
}

impl<T> Drop for DynArr<T> {
    fn drop(&mut self) {
        // SAFETY: the first `len` slots are initialized, `RawArray` handles deallocation
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len)) }
    }
}

impl<T> Default for DynArr<T> {
    /// Creates an empty `DynArr<T>`, with room for a single element.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: fmt::Display> fmt::Display for DynArr<T> {
    /// Formats the elements as `[a, b, c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, elem) in self.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str("]")
    }
}

impl<T> AsRef<[T]> for DynArr<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynArr<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> From<&[T]> for DynArr<T> {
    /// Allocate a `DynArr<T>` and fill it by cloning `s`'s items.
    fn from(s: &[T]) -> Self {
        let mut arr = Self::new();
        arr.reserve_for(s.len());
        arr.extend(s.iter().cloned());
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynArr<T> {
    fn from(s: [T; N]) -> Self {
        let mut arr = Self::new();
        arr.reserve_for(N);
        arr.extend(s);
        arr
    }
}

impl<T> From<Vec<T>> for DynArr<T> {
    fn from(v: Vec<T>) -> Self {
        let mut arr = Self::new();
        arr.reserve_for(v.len());
        arr.extend(v);
        arr
    }
}

impl<T> From<DynArr<T>> for Vec<T> {
    fn from(arr: DynArr<T>) -> Self {
        arr.into_iter().collect()
    }
}
