//! `ArrayPtr`: exclusive ownership of a single heap-allocated array.
//!
//! The pointer knows how long its block is only because the allocator needs it
//! back on release; it keeps no notion of which slots are meaningful. Whoever
//! holds the `ArrayPtr` (typically a growable container) tracks that.

use std::fmt;
use std::ops::{Index, IndexMut};

/// An owning handle to zero or one heap-allocated array of `T`.
///
/// There is at most one live owner of the block at any time. `ArrayPtr`
/// deliberately does not implement `Clone`: ownership can be moved, released
/// or swapped, never duplicated. The block is freed exactly once, when the
/// owner is dropped.
///
/// # Examples
///
/// ```
/// use simplevec_array_ptr::ArrayPtr;
///
/// let mut a = ArrayPtr::<u32>::with_len(3);
/// a[1] = 7;
/// assert!(a.is_allocated());
///
/// let mut b = ArrayPtr::new();
/// a.swap(&mut b);
/// assert!(!a.is_allocated());
/// assert_eq!(b.as_slice(), &[0, 7, 0]);
/// ```
pub struct ArrayPtr<T> {
    /// The owned block. A zero-length slice is the empty state and does
    /// not allocate.
    items: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates an empty `ArrayPtr` that owns nothing.
    pub fn new() -> ArrayPtr<T> {
        ArrayPtr {
            items: Box::default(),
        }
    }

    /// Takes ownership of an already allocated block.
    ///
    /// An empty block leaves the pointer in the empty state.
    pub fn from_boxed_slice(items: Box<[T]>) -> ArrayPtr<T> {
        ArrayPtr { items }
    }

    /// Returns `true` if the pointer currently owns a non-empty allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns the number of slots in the owned block (0 when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the pointer owns nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a raw pointer to the start of the owned block.
    ///
    /// The pointer is dangling (but non-null and aligned) for the empty state.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns the whole owned block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the whole owned block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Relinquishes ownership of the block without freeing it.
    ///
    /// The pointer is left empty; the caller is now responsible for the
    /// returned block.
    #[must_use = "dropping the released block frees it"]
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.items)
    }

    /// Takes ownership of `items` without releasing the current block first.
    ///
    /// This is a low-level primitive: the pointer is expected to be empty
    /// (for example right after [`ArrayPtr::release`]). Whatever block was
    /// held before is handed back to the caller rather than being freed here.
    #[must_use = "dropping the displaced block frees it"]
    pub fn acquire(&mut self, items: Box<[T]>) -> Box<[T]> {
        debug_assert!(
            !self.is_allocated(),
            "acquire called on an ArrayPtr that still owns {} slots",
            self.len()
        );
        std::mem::replace(&mut self.items, items)
    }

    /// Exchanges owned blocks with `other` in O(1).
    ///
    /// Both sides release before either acquires, so a block is never owned
    /// twice mid-operation.
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        let mine = self.release();
        let theirs = other.release();
        let _ = self.acquire(theirs);
        let _ = other.acquire(mine);
    }

    /// Consumes the pointer and returns the owned block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.items
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.items.len());
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.items.len());
        unsafe { self.items.get_unchecked_mut(index) }
    }
}

impl<T: Default> ArrayPtr<T> {
    /// Allocates a block of `len` default-initialized slots.
    ///
    /// `len == 0` yields the empty state without allocating.
    pub fn with_len(len: usize) -> ArrayPtr<T> {
        if len == 0 {
            return ArrayPtr::new();
        }
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        ArrayPtr {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::new()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    /// Slot access within the allocation.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the owned block.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(items: Box<[T]>) -> Self {
        ArrayPtr::from_boxed_slice(items)
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(items: Vec<T>) -> Self {
        ArrayPtr::from_boxed_slice(items.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("len", &self.items.len())
            .field("ptr", &self.items.as_ptr())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let p = ArrayPtr::<i32>::new();
        assert!(!p.is_allocated());
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_with_len_default_fills() {
        let p = ArrayPtr::<i32>::with_len(4);
        assert!(p.is_allocated());
        assert_eq!(p.as_slice(), &[0, 0, 0, 0]);

        let p = ArrayPtr::<String>::with_len(0);
        assert!(!p.is_allocated());
    }

    #[test]
    fn test_from_boxed_slice() {
        let p = ArrayPtr::from_boxed_slice(vec![1, 2, 3].into_boxed_slice());
        assert!(p.is_allocated());
        assert_eq!(p[2], 3);

        let p: ArrayPtr<u8> = Vec::new().into();
        assert!(!p.is_allocated());
    }

    #[test]
    fn test_index_write() {
        let mut p = ArrayPtr::<u64>::with_len(2);
        p[0] = 10;
        p[1] = 20;
        assert_eq!(p.as_slice(), &[10, 20]);
        unsafe {
            *p.get_unchecked_mut(1) += 1;
            assert_eq!(*p.get_unchecked(1), 21);
        }
    }

    #[test]
    #[should_panic]
    fn test_index_outside_allocation_panics() {
        let p = ArrayPtr::<u64>::with_len(2);
        let _ = p[2];
    }

    #[test]
    fn test_release_leaves_empty() {
        let mut p = ArrayPtr::from(vec![1, 2]);
        let ptr = p.as_ptr();
        let block = p.release();
        assert!(!p.is_allocated());
        assert_eq!(block.as_ptr(), ptr);
        assert_eq!(&*block, &[1, 2]);
    }

    #[test]
    fn test_acquire_after_release() {
        let mut p = ArrayPtr::from(vec![1, 2]);
        let block = p.release();
        let displaced = p.acquire(block);
        assert!(displaced.is_empty());
        assert_eq!(p.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_swap_exchanges_blocks() {
        let mut a = ArrayPtr::from(vec![1, 2, 3]);
        let mut b = ArrayPtr::from(vec![9]);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);

        let mut empty = ArrayPtr::new();
        a.swap(&mut empty);
        assert!(!a.is_allocated());
        assert_eq!(empty.as_slice(), &[9]);
    }

    #[test]
    fn test_drop_releases_exactly_once() {
        let marker = Rc::new(());
        {
            let p = ArrayPtr::from(vec![marker.clone(), marker.clone()]);
            assert_eq!(Rc::strong_count(&marker), 3);
            let mut q = ArrayPtr::new();
            let mut p = p;
            p.swap(&mut q);
            assert_eq!(Rc::strong_count(&marker), 3);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_into_boxed_slice() {
        let p = ArrayPtr::from(vec!['a', 'b']);
        assert_eq!(&*p.into_boxed_slice(), &['a', 'b']);
    }
}
