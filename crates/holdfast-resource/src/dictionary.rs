//! Keyed object storage produced by resource objects.

use std::rc::Rc;

use holdfast_core::{DataVisitor, Object};
use indexmap::IndexMap;

/// An insertion-ordered map from string keys to owned object handles.
///
/// Like [`ObjectVector`](holdfast_vector::ObjectVector), each entry owns one
/// strong reference. Replacing or removing an entry hands the old handle
/// back to the caller.
#[derive(Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<String, Rc<dyn Object>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the entry for `key`, returning the previous handle.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        object: Rc<dyn Object>,
    ) -> Option<Rc<dyn Object>> {
        self.entries.insert(key.into(), object)
    }

    /// Borrow the handle stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Rc<dyn Object>> {
        self.entries.get(key)
    }

    /// Borrow the value under `key` as a `U`, if present and of that type.
    pub fn get_as<U: Object>(&self, key: &str) -> Option<&U> {
        self.entries.get(key)?.downcast_ref::<U>()
    }

    /// Remove the entry for `key`, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Rc<dyn Object>> {
        self.entries.shift_remove(key)
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<dyn Object>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Object for Dictionary {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_dictionary(
            &mut self
                .entries
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_object())),
        );
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v.type_name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdfast_core::{IntValue, PrettyPrinter, StringValue};
    use holdfast_test_utils::{erased, DropLog};

    #[test]
    fn insert_replace_and_remove_hand_back_handles() {
        let log = DropLog::new();
        let mut dict = Dictionary::new();
        assert!(dict.insert("hero", erased(&log.probe("first"))).is_none());

        let old = dict.insert("hero", erased(&log.probe("second")));
        assert!(log.is_empty());
        drop(old);
        assert_eq!(log.dropped(), ["first"]);

        let removed = dict.remove("hero");
        assert!(dict.is_empty());
        drop(removed);
        assert_eq!(log.dropped(), ["first", "second"]);
    }

    #[test]
    fn keeps_insertion_order_across_removal() {
        let mut dict = Dictionary::new();
        dict.insert("z", IntValue::shared(1));
        dict.insert("a", IntValue::shared(2));
        dict.insert("m", IntValue::shared(3));
        dict.remove("a");
        assert_eq!(dict.keys().collect::<Vec<_>>(), ["z", "m"]);
    }

    #[test]
    fn get_as_downcasts() {
        let mut dict = Dictionary::with_capacity(2);
        dict.insert("name", StringValue::shared("knight"));
        dict.insert("hp", IntValue::shared(30));
        assert_eq!(dict.get_as::<StringValue>("name").map(|s| s.as_str()), Some("knight"));
        assert_eq!(dict.get_as::<IntValue>("hp"), Some(&IntValue(30)));
        assert!(dict.get_as::<IntValue>("name").is_none());
        assert!(dict.get_as::<IntValue>("missing").is_none());
        assert!(dict.contains_key("hp"));
    }

    #[test]
    fn visits_entries_in_order() {
        let mut dict = Dictionary::new();
        dict.insert("b", IntValue::shared(2));
        dict.insert("a", StringValue::shared("x"));
        let mut printer = PrettyPrinter::new();
        dict.accept_visitor(&mut printer);
        assert_eq!(printer.result(), "<dictionary>\n    b: 2\n    a: x\n</dictionary>");
    }
}
