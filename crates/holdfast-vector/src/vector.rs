//! The owning object vector.
//!
//! [`ObjectVector`] is an ordered sequence of strong references. Each slot
//! owns exactly one `Rc` to its object, so an object stored in two slots is
//! referenced twice by the container. Every mutation moves handles in and
//! out of slots; nothing is retained or released except the handles that
//! enter or leave the container.
//!
//! # Removal and ownership transfer
//!
//! Removal operations return the handle they took out of the slot. Dropping
//! it releases the slot's reference; keeping it transfers that reference to
//! the caller with the count unchanged.
//!
//! # Ordered vs. fast removal
//!
//! [`remove_at`](ObjectVector::remove_at) and
//! [`remove_object`](ObjectVector::remove_object) shift the tail down and
//! preserve the order of every other element (O(n)).
//! [`fast_remove_at`](ObjectVector::fast_remove_at) and
//! [`fast_remove_object`](ObjectVector::fast_remove_object) move the last
//! element into the freed slot instead (O(1)): removing index 0 from
//! `[A, B, C, D]` yields `[D, B, C]`. Callers that depend on order must use
//! the ordered family.
//!
//! # Preconditions
//!
//! Indexed operations panic on an out-of-range index. An out-of-range index
//! is a caller bug, not a recoverable condition, and the container is left
//! untouched when the panic fires.

use std::fmt;
use std::ops::Index;
use std::rc::Rc;

use holdfast_core::{DataVisitor, Object};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Identity comparison across handle types.
///
/// Compares allocation addresses only, so an `Rc<Probe>` and the
/// `Rc<dyn Object>` made from it are the same object.
pub(crate) fn same_object<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

/// An ordered, owning sequence of reference-counted objects.
///
/// `T` defaults to `dyn Object` for heterogeneous storage; any `?Sized` type
/// works for the ownership operations. Visiting, bulk-apply and `Debug`
/// additionally require `T: Object`.
pub struct ObjectVector<T: ?Sized = dyn Object> {
    elements: Vec<Rc<T>>,
}

impl<T: ?Sized> ObjectVector<T> {
    /// Capacity reserved by [`ObjectVector::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty vector with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// slots reserved.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty vector that can hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Create a vector holding a single object.
    pub fn with_object(object: Rc<T>) -> Self {
        let mut v = Self::new();
        v.append(object);
        v
    }

    /// Create a vector from objects in iteration order.
    ///
    /// Each handle is moved into its slot, so each object gains exactly the
    /// reference the caller passed in.
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = Rc<T>>,
    {
        let mut v = Self::new();
        v.extend(objects);
        v
    }

    /// Create a vector holding new references to every object of `other`,
    /// in the same order. The two vectors share objects, not storage.
    pub fn with_vector(other: &Self) -> Self {
        let mut v = Self::with_capacity(other.len());
        v.append_all(other);
        v
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Number of elements. Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of slots reserved.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Index of the first slot holding `object`, compared by identity.
    ///
    /// Returns `None` when the object is absent; never a valid index.
    pub fn index_of<U: ?Sized>(&self, object: &Rc<U>) -> Option<usize> {
        self.elements.iter().position(|e| same_object(e, object))
    }

    /// Whether any slot holds `object`.
    pub fn contains<U: ?Sized>(&self, object: &Rc<U>) -> bool {
        self.index_of(object).is_some()
    }

    /// Borrow the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn at(&self, index: usize) -> &Rc<T> {
        let count = self.elements.len();
        assert!(
            index < count,
            "index {index} out of range in at() (count {count})"
        );
        &self.elements[index]
    }

    /// Borrow the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Rc<T>> {
        self.elements.get(index)
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&Rc<T>> {
        self.elements.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&Rc<T>> {
        self.elements.last()
    }

    /// A uniformly chosen element from the thread-local RNG, or `None` if
    /// empty.
    pub fn random_element(&self) -> Option<&Rc<T>> {
        self.random_element_with(&mut rand::rng())
    }

    /// A uniformly chosen element drawn from `rng`, or `None` if empty.
    pub fn random_element_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Rc<T>> {
        self.elements.choose(rng)
    }

    /// Whether both vectors hold the same objects in the same order.
    pub fn equals_sequence<U: ?Sized>(&self, other: &ObjectVector<U>) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| same_object(a, b))
    }

    /// The slots as a slice of handles.
    pub fn as_slice(&self) -> &[Rc<T>] {
        &self.elements
    }

    /// Iterate over the elements front to back. Reverse with `.rev()`.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<T>> {
        self.elements.iter()
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Append an object at the end.
    pub fn append(&mut self, object: Rc<T>) {
        self.elements.push(object);
    }

    /// Append a new reference to every object of `other`, in order.
    pub fn append_all(&mut self, other: &Self) {
        self.elements.extend(other.elements.iter().cloned());
    }

    /// Insert an object at `index`, shifting `[index, count)` up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.count()`.
    pub fn insert_at(&mut self, object: Rc<T>, index: usize) {
        let count = self.elements.len();
        assert!(
            index <= count,
            "index {index} out of range in insert_at() (count {count})"
        );
        self.elements.insert(index, object);
    }

    /// Store `object` at `index`, releasing the previous occupant.
    ///
    /// The new handle is stored before the old one is dropped, so setting a
    /// slot to the object it already holds never destroys it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn set_at(&mut self, index: usize, object: Rc<T>) {
        drop(self.replace_at(index, object));
    }

    /// Store `object` at `index` and hand the previous occupant back to the
    /// caller without releasing it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn replace_at(&mut self, index: usize, object: Rc<T>) -> Rc<T> {
        let count = self.elements.len();
        assert!(
            index < count,
            "index {index} out of range in replace_at() (count {count})"
        );
        std::mem::replace(&mut self.elements[index], object)
    }

    // ── Removal ─────────────────────────────────────────────────

    /// Remove the last element. A no-op returning `None` when empty.
    pub fn remove_last(&mut self) -> Option<Rc<T>> {
        self.elements.pop()
    }

    /// Remove the element at `index`, shifting the tail down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn remove_at(&mut self, index: usize) -> Rc<T> {
        let count = self.elements.len();
        assert!(
            index < count,
            "index {index} out of range in remove_at() (count {count})"
        );
        self.elements.remove(index)
    }

    /// Remove the first slot holding `object`, shifting the tail down.
    /// A no-op returning `None` if the object is absent.
    pub fn remove_object<U: ?Sized>(&mut self, object: &Rc<U>) -> Option<Rc<T>> {
        let index = self.index_of(object)?;
        Some(self.elements.remove(index))
    }

    /// For each element of `other`, remove its first occurrence from this
    /// vector (ordered removal), releasing the removed references.
    ///
    /// Returns the number of slots removed.
    pub fn remove_all<U: ?Sized>(&mut self, other: &ObjectVector<U>) -> usize {
        let mut removed = 0;
        for object in &other.elements {
            if self.remove_object(object).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Remove and release every element.
    ///
    /// Reserved capacity is kept. Clearing an empty vector releases nothing.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Remove the element at `index` by moving the last element into its
    /// slot. O(1); does **not** preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn fast_remove_at(&mut self, index: usize) -> Rc<T> {
        let count = self.elements.len();
        assert!(
            index < count,
            "index {index} out of range in fast_remove_at() (count {count})"
        );
        self.elements.swap_remove(index)
    }

    /// Remove the first slot holding `object` by moving the last element
    /// into it. O(1) after the search; does **not** preserve order.
    pub fn fast_remove_object<U: ?Sized>(&mut self, object: &Rc<U>) -> Option<Rc<T>> {
        let index = self.index_of(object)?;
        Some(self.elements.swap_remove(index))
    }

    // ── Rearrangement ───────────────────────────────────────────

    /// Exchange the contents of two slots. Reference counts are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_at(&mut self, i: usize, j: usize) {
        let count = self.elements.len();
        assert!(
            i < count && j < count,
            "invalid indices ({i}, {j}) in swap_at() (count {count})"
        );
        self.elements.swap(i, j);
    }

    /// Exchange two slots. Alias of [`swap_at`](Self::swap_at).
    pub fn exchange_at(&mut self, i: usize, j: usize) {
        self.swap_at(i, j);
    }

    /// Exchange the first slots holding `a` and `b`.
    ///
    /// A no-op if either object is absent.
    pub fn exchange<A: ?Sized, B: ?Sized>(&mut self, a: &Rc<A>, b: &Rc<B>) {
        if let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) {
            self.elements.swap(i, j);
        }
    }

    /// Reverse element order in place.
    pub fn reverse(&mut self) {
        self.elements.reverse();
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Drop reserved capacity beyond the current element count.
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Mutable access to the slot storage for the unsafe fast path.
    pub(crate) fn slots_mut(&mut self) -> &mut [Rc<T>] {
        &mut self.elements
    }

    pub(crate) fn into_elements(self) -> Vec<Rc<T>> {
        self.elements
    }
}

impl<T: ?Sized + Object> ObjectVector<T> {
    /// Hand the elements to `visitor` as a sequence, in order.
    pub fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_sequence(&mut self.elements.iter().map(|e| e.as_object()));
    }
}

impl<T: ?Sized + Object> Object for ObjectVector<T> {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        ObjectVector::accept_visitor(self, visitor);
    }
}

impl<T: ?Sized> Clone for ObjectVector<T> {
    /// New references to the same objects, in the same order.
    fn clone(&self) -> Self {
        Self::with_vector(self)
    }
}

impl<T: ?Sized> Default for ObjectVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Index<usize> for ObjectVector<T> {
    type Output = Rc<T>;

    fn index(&self, index: usize) -> &Rc<T> {
        self.at(index)
    }
}

impl<T: ?Sized> Extend<Rc<T>> for ObjectVector<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: ?Sized> FromIterator<Rc<T>> for ObjectVector<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        Self::from_objects(iter)
    }
}

impl<T: ?Sized + Object> fmt::Debug for ObjectVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.elements.iter().map(|e| e.type_name()).collect();
        f.debug_struct("ObjectVector")
            .field("count", &self.elements.len())
            .field("elements", &types)
            .finish()
    }
}
