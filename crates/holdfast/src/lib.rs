//! Holdfast: owning, reference-counted object containers for game runtimes.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! holdfast sub-crates. For most users, adding `holdfast` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::rc::Rc;
//! use holdfast::prelude::*;
//!
//! let hero = StringValue::shared("hero");
//! let mut scene: ObjectVector = ObjectVector::new();
//! scene.append(hero.clone());
//! scene.append(IntValue::shared(3));
//! assert_eq!(Rc::strong_count(&hero), 2);
//!
//! // Removal hands the slot's reference back; dropping it releases it.
//! drop(scene.remove_object(&hero));
//! assert_eq!(Rc::strong_count(&hero), 1);
//!
//! let level = ResourceLoader::default().load_str(r#"[{"name": "hero"}]"#).unwrap();
//! assert!(level[0].is::<Dictionary>());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`object`] | `holdfast-core` | `Object` protocol, boxed scalars, visitors |
//! | [`vector`] | `holdfast-vector` | `ObjectVector`, cursors, the raw fast path |
//! | [`resource`] | `holdfast-resource` | JSON resource loading, `Dictionary` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The object protocol, boxed scalars and visitors (`holdfast-core`).
pub use holdfast_core as object;

/// Owning object vectors (`holdfast-vector`).
///
/// [`vector::ObjectVector`] is the main container; [`vector::Cursor`] walks
/// a vector that is mutated during the walk.
pub use holdfast_vector as vector;

/// JSON resource loading (`holdfast-resource`).
///
/// [`resource::load_vector`] loads a file with default limits;
/// [`resource::ResourceLoader`] takes a [`resource::ResourceConfig`].
pub use holdfast_resource as resource;

pub use holdfast_vector::object_vector;

/// Common imports for typical holdfast usage.
///
/// ```rust
/// use std::rc::Rc;
/// use holdfast::prelude::*;
///
/// let v: ObjectVector = object_vector![IntValue::shared(1) as Rc<dyn Object>];
/// assert_eq!(v.count(), 1);
/// ```
pub mod prelude {
    // Object protocol
    pub use holdfast_core::{
        AsObject, BoolValue, DataVisitor, DoubleValue, IntValue, Object, PrettyPrinter,
        StringValue,
    };

    // Containers
    pub use holdfast_vector::{object_vector, Cursor, ObjectVector};

    // Resources
    pub use holdfast_resource::{
        load_vector, Dictionary, ResourceConfig, ResourceLoadError, ResourceLoader,
    };
}
