//! Benchmark fixtures for holdfast containers.
//!
//! - [`int_vector`]: a homogeneous vector of boxed integers
//! - [`mixed_vector`]: a heterogeneous `dyn Object` vector
//! - [`level_document`]: a JSON resource of configurable size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;
use std::rc::Rc;

use holdfast_core::{BoolValue, DoubleValue, IntValue, Object, StringValue};
use holdfast_vector::ObjectVector;

/// Build a vector holding `IntValue(0)..IntValue(n)`.
pub fn int_vector(n: usize) -> ObjectVector<IntValue> {
    (0..n as i64).map(IntValue::shared).collect()
}

/// Build a vector of `n` elements cycling through every scalar kind.
pub fn mixed_vector(n: usize) -> ObjectVector {
    (0..n)
        .map(|i| -> Rc<dyn Object> {
            match i % 4 {
                0 => IntValue::shared(i as i64),
                1 => DoubleValue::shared(i as f64 * 0.5),
                2 => BoolValue::shared(i % 8 == 2),
                _ => StringValue::shared(format!("node-{i}")),
            }
        })
        .collect()
}

/// Render a level resource with `entities` dictionary entries.
pub fn level_document(entities: usize) -> String {
    let mut out = String::from("[");
    for i in 0..entities {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(
            out,
            r#"{{"name":"entity-{i}","z":{i},"scale":1.5,"visible":true,"path":[{i},{i}]}}"#
        );
    }
    out.push(']');
    out
}
