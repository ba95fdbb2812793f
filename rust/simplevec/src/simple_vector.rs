use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, Index, IndexMut},
};

use simplevec_array_ptr::ArrayPtr;
use simplevec_common::{Result, result::verify_index, verify_arg};

/// A growable array over a single exclusively owned heap block.
///
/// The vector tracks two lengths explicitly:
/// - `len`: the occupied prefix `[0, len)`, holding meaningful values;
/// - `capacity`: the number of allocated slots, always equal to the length of
///   the backing [`ArrayPtr`].
///
/// Slots in `[len, capacity)` are allocated but their contents are unspecified:
/// they may hold default values or stale values from earlier occupancy.
///
/// When an append finds no free slot, the capacity grows to
/// [`SimpleVector::INITIAL_CAPACITY`] (from zero) or by
/// [`SimpleVector::GROWTH_FACTOR`], the occupied prefix is moved into the new
/// block and the old block is released.
///
/// # Access tiers
///
/// - [`SimpleVector::at`] / [`SimpleVector::at_mut`] validate the index against
///   `len` and report [`ErrorKind::OutOfRange`](simplevec_common::error::ErrorKind).
/// - `v[i]` is a thin pass-through to the backing block: it does not check
///   against `len`, only against the allocation (and panics outside of it).
/// - [`SimpleVector::get_unchecked`] performs no check at all.
///
/// # Examples
///
/// ```
/// use simplevec::SimpleVector;
///
/// let mut v = SimpleVector::new();
/// v.push_back(10);
/// v.push_back(20);
/// v.push_back(30);
/// assert_eq!((v.len(), v.capacity()), (3, 4));
///
/// v.erase(0);
/// assert_eq!(v, [20, 30]);
/// ```
pub struct SimpleVector<T> {
    /// Backing storage, exactly `capacity` slots long.
    items: ArrayPtr<T>,
    /// Length of the occupied prefix.
    size: usize,
    /// Number of allocated slots.
    capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Capacity chosen when an append hits an unallocated vector.
    pub const INITIAL_CAPACITY: usize = 1;
    /// Multiplier applied to the capacity when an append hits a full vector.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty vector without allocating.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(),
            size: 0,
            capacity: 0,
        }
    }

    /// Returns the number of elements in the occupied prefix.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the total size in bytes of the backing allocation.
    pub fn heap_size(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRange` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRange` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(&mut self.items[index])
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`SimpleVector::capacity`]. Slots at or past
    /// `len` hold unspecified (but initialized) values.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`SimpleVector::capacity`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Returns the occupied prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the occupied prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns an iterator over the occupied prefix.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutating iterator over the occupied prefix.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Shrinks the occupied prefix by one element. Does nothing when empty.
    ///
    /// The vacated slot keeps its value until it is overwritten.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Removes the element at `index`, shifting the tail one slot to the left.
    ///
    /// Returns the position of the element that followed the removed one,
    /// which is `index` itself.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.size;
        assert!(
            index < len,
            "erase index (is {index}) should be < len (is {len})"
        );
        self.items.as_mut_slice()[index..len].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Sets the length to zero, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges contents with `other` in O(1); no element is copied or moved.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `len` default-initialized elements, with capacity `len`.
    pub fn with_len(len: usize) -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::with_len(len),
            size: len,
            capacity: len,
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::with_len(capacity),
            size: 0,
            capacity,
        }
    }

    /// Appends `value` to the end of the vector, growing the allocation if it
    /// is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            self.grow();
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the tail one slot to the right.
    ///
    /// `index == len` appends. Returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.size;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity {
            self.grow();
        }
        // The free slot at `len` rotates down to `index` and is overwritten.
        self.items.as_mut_slice()[index..=len].rotate_right(1);
        self.items[index] = value;
        self.size += 1;
        index
    }

    /// Changes the length to `new_len`.
    ///
    /// Shrinking only moves the length. Growing within the capacity fills the
    /// new slots with `T::default()`. Growing past the capacity reallocates to
    /// exactly `new_len` slots.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.size {
            self.size = new_len;
        } else if new_len <= self.capacity {
            self.items.as_mut_slice()[self.size..new_len]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
            self.size = new_len;
        } else {
            self.relocate(new_len);
            self.size = new_len;
        }
    }

    /// Reallocates the backing block to exactly `new_capacity` slots, keeping
    /// the occupied prefix.
    ///
    /// The reallocation happens even when `new_capacity` equals the current
    /// capacity, and it may shrink the allocation down to `len`.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if `new_capacity < len`; the vector is left
    /// untouched.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        verify_arg!(new_capacity, new_capacity >= self.size);
        self.relocate(new_capacity);
        Ok(())
    }

    #[cold]
    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            Self::INITIAL_CAPACITY
        } else {
            self.capacity
                .checked_mul(Self::GROWTH_FACTOR)
                .expect("capacity overflow")
        };
        self.relocate(new_capacity);
    }

    /// Moves the occupied prefix into a fresh default-filled block of
    /// `new_capacity` slots and releases the old block.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "SimpleVector relocate: capacity {} -> {}, len {}",
            self.capacity,
            new_capacity,
            self.size
        );
        let len = self.size;
        let mut fresh = ArrayPtr::with_len(new_capacity);
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.items.as_mut_slice()[..len]);
        self.items.swap(&mut fresh);
        self.capacity = new_capacity;
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `len` copies of `value`, with capacity `len`.
    pub fn from_value(len: usize, value: T) -> SimpleVector<T> {
        SimpleVector::from(vec![value; len])
    }

    /// Creates a vector holding a copy of `values`, with capacity equal to
    /// `values.len()`.
    pub fn from_slice(values: &[T]) -> SimpleVector<T> {
        SimpleVector::from(values.to_vec())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

/// Copies the occupied prefix into an independent block of the same capacity.
impl<T: Clone + Default> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        let mut items = ArrayPtr::with_len(self.capacity);
        items.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        SimpleVector {
            items,
            size: self.size,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("len", &self.size)
            .field("cap", &self.capacity)
            .finish()
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic order over the occupied prefixes.
///
/// `<=` is `< || ==`, `>` is `!(<=)` and `>=` is `!(<)`.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }

    fn lt(&self, other: &Self) -> bool {
        self.as_slice() < other.as_slice()
    }

    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self.as_slice() == other.as_slice()
    }

    fn gt(&self, other: &Self) -> bool {
        !self.le(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        let items = ArrayPtr::from(values);
        let len = items.len();
        SimpleVector {
            items,
            size: len,
            capacity: len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVector::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector::from_slice(values)
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the vector, yielding the occupied prefix by value. Slots past
    /// `len` are dropped.
    fn into_iter(self) -> Self::IntoIter {
        let mut values = self.items.into_boxed_slice().into_vec();
        values.truncate(self.size);
        values.into_iter()
    }
}
