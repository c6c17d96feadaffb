//! Test utilities and probe objects for holdfast development.
//!
//! [`Probe`] is an [`Object`] that records its own destruction in a shared
//! [`DropLog`]. Together with `Rc::strong_count` this is enough to check the
//! ownership contract of a container: how many references it holds, and that
//! every reference it gives up is released exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

use holdfast_core::Object;

/// Shared record of destroyed probes, in destruction order.
///
/// Cloning a `DropLog` yields another handle onto the same record.
#[derive(Clone, Debug, Default)]
pub struct DropLog {
    dropped: Rc<RefCell<Vec<String>>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe that reports to this log.
    pub fn probe(&self, name: &str) -> Rc<Probe> {
        Rc::new(Probe {
            name: name.to_owned(),
            log: self.clone(),
        })
    }

    /// Create several probes at once, in argument order.
    pub fn probes<const N: usize>(&self, names: [&str; N]) -> [Rc<Probe>; N] {
        names.map(|name| self.probe(name))
    }

    /// Names of destroyed probes, oldest first.
    pub fn dropped(&self) -> Vec<String> {
        self.dropped.borrow().clone()
    }

    /// How many times the named probe has been destroyed (0 or 1 when the
    /// code under test is correct).
    pub fn drop_count(&self, name: &str) -> usize {
        self.dropped.borrow().iter().filter(|n| *n == name).count()
    }

    /// Total number of destroyed probes.
    pub fn len(&self) -> usize {
        self.dropped.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.borrow().is_empty()
    }
}

/// A named object that logs its destruction.
#[derive(Debug)]
pub struct Probe {
    name: String,
    log: DropLog,
}

impl Probe {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.log.dropped.borrow_mut().push(self.name.clone());
    }
}

impl Object for Probe {}

/// A second probe type, for tests that need elements of mixed concrete type.
#[derive(Debug)]
pub struct Marker(pub u32);

impl Object for Marker {}

/// Upcast a probe handle for storage in an `ObjectVector<dyn Object>`.
pub fn erased(probe: &Rc<Probe>) -> Rc<dyn Object> {
    probe.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_logs_drop_once() {
        let log = DropLog::new();
        let p = log.probe("p");
        let q = Rc::clone(&p);
        drop(p);
        assert!(log.is_empty());
        drop(q);
        assert_eq!(log.dropped(), ["p"]);
        assert_eq!(log.drop_count("p"), 1);
    }

    #[test]
    fn probes_are_created_in_order() {
        let log = DropLog::new();
        let [a, b] = log.probes(["a", "b"]);
        assert_eq!(a.name(), "a");
        assert_eq!(b.name(), "b");
    }
}
