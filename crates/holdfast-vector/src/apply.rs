//! Typed bulk operations over heterogeneous vectors.
//!
//! A scene graph keeps mixed node types in one `ObjectVector<dyn Object>` and
//! regularly needs to "call this on every sprite". These helpers walk the
//! vector in order, downcast each element, and skip the ones of another type.

use holdfast_core::Object;

use crate::vector::ObjectVector;

impl<T: ?Sized + Object> ObjectVector<T> {
    /// Invoke `f` on every element whose concrete type is `U`, in order.
    ///
    /// Returns how many elements matched.
    pub fn perform_on<U: Object>(&self, mut f: impl FnMut(&U)) -> usize {
        let mut matched = 0;
        for element in self.iter() {
            if let Some(target) = element.as_any().downcast_ref::<U>() {
                f(target);
                matched += 1;
            }
        }
        matched
    }

    /// Like [`perform_on`](Self::perform_on), passing `arg` to each call.
    pub fn perform_on_with<U: Object, A: ?Sized>(
        &self,
        arg: &A,
        mut f: impl FnMut(&U, &A),
    ) -> usize {
        self.perform_on(|target: &U| f(target, arg))
    }

    /// Whether every element's concrete type is `U`. True when empty.
    pub fn verify_type<U: Object>(&self) -> bool {
        self.iter().all(|element| element.as_any().is::<U>())
    }

    /// Assert, in debug builds only, that every element is a `U`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if any element has another concrete type.
    pub fn debug_verify_type<U: Object>(&self) {
        debug_assert!(
            self.verify_type::<U>(),
            "element type is wrong: expected {}",
            std::any::type_name::<U>()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use holdfast_test_utils::{erased, DropLog, Marker, Probe};

    fn mixed(log: &DropLog) -> ObjectVector {
        let mut v: ObjectVector = ObjectVector::new();
        v.append(erased(&log.probe("a")));
        v.append(Rc::new(Marker(10)));
        v.append(erased(&log.probe("b")));
        v.append(Rc::new(Marker(20)));
        v
    }

    #[test]
    fn perform_on_visits_only_matching_type_in_order() {
        let log = DropLog::new();
        let v = mixed(&log);
        let mut names = Vec::new();
        let matched = v.perform_on(|p: &Probe| names.push(p.name().to_owned()));
        assert_eq!(matched, 2);
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn perform_on_with_passes_argument() {
        let log = DropLog::new();
        let v = mixed(&log);
        let total = Cell::new(0);
        v.perform_on_with(&3, |m: &Marker, k: &u32| total.set(total.get() + m.0 * k));
        assert_eq!(total.get(), 90);
    }

    #[test]
    fn verify_type_checks_every_element() {
        let log = DropLog::new();
        let v = mixed(&log);
        assert!(!v.verify_type::<Probe>());

        let probes = ObjectVector::from_objects(log.probes(["x", "y"]));
        assert!(probes.verify_type::<Probe>());
        probes.debug_verify_type::<Probe>();

        let empty: ObjectVector = ObjectVector::new();
        assert!(empty.verify_type::<Marker>());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "element type is wrong")]
    fn debug_verify_type_panics_on_mismatch() {
        let log = DropLog::new();
        mixed(&log).debug_verify_type::<Marker>();
    }
}
