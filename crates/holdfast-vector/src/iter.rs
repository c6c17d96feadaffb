//! Iteration over object vectors.
//!
//! Borrowing iteration (`for obj in &vector`, [`ObjectVector::iter`]) holds a
//! shared borrow for the whole loop, so the borrow checker rules out
//! mutation mid-traversal.
//!
//! [`Cursor`] is the escape hatch for loops that must mutate the vector they
//! walk. It borrows the vector only for the duration of each step and hands
//! out owned handles, so the current element stays alive even if its slot is
//! removed. When its position falls outside `[0, count)`, for instance
//! because the tail was removed, the walk ends instead of faulting. Elements
//! inserted or removed before the cursor position shift what it sees next;
//! that is the caller's problem.

use std::rc::Rc;

use crate::vector::ObjectVector;

/// A detached forward position in an [`ObjectVector`].
///
/// ```
/// use holdfast_core::IntValue;
/// use holdfast_vector::{Cursor, ObjectVector};
///
/// let mut v = ObjectVector::from_objects((0..4).map(IntValue::shared));
/// let mut cursor = Cursor::new();
/// while let Some(item) = cursor.advance(&v) {
///     if item.0 == 1 {
///         // Dropping the tail ends the walk early.
///         while v.count() > 2 {
///             v.remove_last();
///         }
///     }
/// }
/// assert_eq!(cursor.position(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// A cursor at the front.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Index of the next element this cursor will yield.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Yield a new handle to the element at the current position and step
    /// forward, or `None` once the position is past the end of `vector`.
    pub fn advance<T: ?Sized>(&mut self, vector: &ObjectVector<T>) -> Option<Rc<T>> {
        let item = Rc::clone(vector.get(self.position)?);
        self.position += 1;
        Some(item)
    }

    /// Step back one position, so the next [`advance`](Self::advance)
    /// revisits the slot that now sits where the last yielded element was.
    ///
    /// Call after removing the element just yielded to avoid skipping its
    /// successor. Saturates at the front.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a ObjectVector<T> {
    type Item = &'a Rc<T>;
    type IntoIter = std::slice::Iter<'a, Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ?Sized> IntoIterator for ObjectVector<T> {
    type Item = Rc<T>;
    type IntoIter = std::vec::IntoIter<Rc<T>>;

    /// Consume the vector, transferring each slot's reference to the caller.
    fn into_iter(self) -> Self::IntoIter {
        self.into_elements().into_iter()
    }
}
