//! A growable array with an explicit capacity-doubling policy.

use alloc::boxed::Box;
use core::fmt;
use core::iter;
use core::slice;

use crate::error::Error;

const DEFAULT_CAPACITY: usize = 16;

/// A contiguous container with amortized O(1) append.
///
/// Elements occupy the first `len` slots of an exclusively owned buffer whose
/// length is the capacity. When an append would overflow the buffer, a new
/// buffer of twice the capacity is allocated and the live elements move over
/// in order. The doubling policy is part of the contract: over n appends the
/// total copying work is O(n), so each append is O(1) on average. The buffer
/// never shrinks.
pub struct DynamicArray<T> {
    // slots below len are always occupied, slots at or above len never are
    buf: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with the default capacity of 16.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with exactly the requested capacity.
    ///
    /// A capacity of 0 is allowed; the first `push` then grows the buffer
    /// to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        // slots below len are always occupied
        Ok(self.buf[index].as_ref().unwrap())
    }

    /// Overwrites the element at `index` in place.
    pub fn set(&mut self, index: usize, elem: T) -> Result<(), Error> {
        self.check_index(index)?;
        self.buf[index] = Some(elem);
        Ok(())
    }

    /// Appends an element at the end, growing the buffer first if it is full.
    pub fn push(&mut self, elem: T) {
        let capacity = self.capacity();
        if self.len + 1 > capacity {
            self.grow(if capacity == 0 { 1 } else { capacity * 2 });
        }
        self.buf[self.len] = Some(elem);
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting every element
    /// after it one slot to the left. O(n).
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;
        let removed = self.buf[index].take().unwrap();
        for i in index..self.len - 1 {
            self.buf[i] = self.buf[i + 1].take();
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Removes the first occurrence of `elem`. Returns whether it was found.
    pub fn remove(&mut self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(elem) {
            Some(index) => {
                // the index comes from a scan of the live slots
                self.remove_at(index).is_ok()
            }
            None => false,
        }
    }

    /// Returns the index of the first occurrence of `elem`, if any. O(n).
    pub fn index_of(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == elem)
    }

    /// Returns true if `elem` occurs in the array. O(n).
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(elem).is_some()
    }

    /// Drops every live element and resets the length to 0. The capacity is
    /// unchanged.
    pub fn clear(&mut self) {
        for slot in self.buf[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the live elements in insertion order.
    ///
    /// The iterator borrows the array, so structural mutation during
    /// iteration is rejected at compile time. Call `iter()` again to restart.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.buf[..self.len].iter(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn grow(&mut self, new_capacity: usize) {
        let mut buf: Box<[Option<T>]> = iter::repeat_with(|| None).take(new_capacity).collect();
        for (dst, src) in buf.iter_mut().zip(self.buf.iter_mut()) {
            *dst = src.take();
        }
        self.buf = buf;
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for elem in iter {
            arr.push(elem);
        }
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", elem)?;
        }
        f.write_str("]")
    }
}

/// An iterator over the elements of a `DynamicArray`.
///
/// This `struct` is created by [`DynamicArray::iter()`]. See its
/// documentation for more.
pub struct Iter<'a, T: 'a> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
