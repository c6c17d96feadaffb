//! Unchecked slot writes that bypass reference counting.
//!
//! This is the only module in the crate allowed to contain `unsafe` code.
//! Everything here trades the container's ownership guarantees for speed at
//! call sites that have already settled ownership by other means, typically
//! code that moves raw object pointers between containers in bulk.

#![allow(unsafe_code)]

use std::rc::Rc;

use crate::vector::ObjectVector;

impl<T: ?Sized> ObjectVector<T> {
    /// Overwrite the slot at `index` with a raw handle, without retaining
    /// the new object or releasing the old one.
    ///
    /// The slot adopts the strong reference carried by `object`, and the
    /// reference the slot previously owned is returned as a raw pointer. The
    /// container does not touch either reference count.
    ///
    /// # Safety
    ///
    /// - `object` must have been produced by [`Rc::into_raw`] (directly or
    ///   via an earlier `fast_set_at`), and the caller must own the strong
    ///   reference it carries. That reference now belongs to the slot.
    /// - The returned pointer carries the strong reference the slot used to
    ///   own. The caller must eventually release it with
    ///   [`Rc::from_raw`] (or store it back with another `fast_set_at`),
    ///   otherwise the old object leaks.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub unsafe fn fast_set_at(&mut self, index: usize, object: *const T) -> *const T {
        let count = self.count();
        assert!(
            index < count,
            "index {index} out of range in fast_set_at() (count {count})"
        );
        // SAFETY: the caller guarantees `object` came from `Rc::into_raw` and
        // donates the strong reference it carries.
        let incoming = unsafe { Rc::from_raw(object) };
        let outgoing = std::mem::replace(&mut self.slots_mut()[index], incoming);
        log::trace!("fast_set_at({index}): slot overwritten without retain/release");
        Rc::into_raw(outgoing)
    }
}
