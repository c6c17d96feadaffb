//! Core object protocol for holdfast containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! abstractions every container in the workspace is built on:
//!
//! - [`Object`]: the polymorphic base trait for stored values, reference
//!   counted through `std::rc::Rc`.
//! - [`DataVisitor`]: double-dispatch traversal used for serialization and
//!   debugging, with [`PrettyPrinter`] as the stock implementation.
//! - Boxed scalars ([`BoolValue`], [`IntValue`], [`DoubleValue`],
//!   [`StringValue`]) produced by resource loading.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod object;
pub mod value;
pub mod visitor;

pub use object::{AsObject, Object};
pub use value::{BoolValue, DoubleValue, IntValue, StringValue};
pub use visitor::{DataVisitor, PrettyPrinter};
