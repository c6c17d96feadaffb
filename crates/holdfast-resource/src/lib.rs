//! JSON resource loading for holdfast object vectors.
//!
//! Turns a JSON document whose root is an array into an
//! [`ObjectVector`](holdfast_vector::ObjectVector) of boxed values, nested
//! vectors and [`Dictionary`] objects.
//!
//! ```
//! use holdfast_core::IntValue;
//! use holdfast_resource::{Dictionary, ResourceLoader};
//!
//! let v = ResourceLoader::default()
//!     .load_str(r#"[1, {"hp": 30}]"#)
//!     .unwrap();
//! assert_eq!(v[0].downcast_ref::<IntValue>(), Some(&IntValue(1)));
//! let stats = v[1].downcast_ref::<Dictionary>().unwrap();
//! assert_eq!(stats.get_as::<IntValue>("hp"), Some(&IntValue(30)));
//! ```
//!
//! Loading either yields a complete vector or a [`ResourceLoadError`]; no
//! partially built containers escape.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dictionary;
pub mod error;
pub mod loader;

pub use config::ResourceConfig;
pub use dictionary::Dictionary;
pub use error::ResourceLoadError;
pub use loader::{load_vector, ResourceLoader};
