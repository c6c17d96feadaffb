//! JSON resource loading.
//!
//! A resource is a JSON document whose root is an array. Loading maps it
//! onto the object model:
//!
//! | JSON               | Object                         |
//! |--------------------|--------------------------------|
//! | array              | [`ObjectVector`] (nested)      |
//! | object             | [`Dictionary`]                 |
//! | string             | [`StringValue`]                |
//! | `true` / `false`   | [`BoolValue`]                  |
//! | integer            | [`IntValue`]                   |
//! | any other number   | [`DoubleValue`]                |
//! | `null`             | rejected                       |
//!
//! The whole document is parsed before any object is built, and the result
//! is only returned once every element is in place.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use std::rc::Rc;

use holdfast_core::{BoolValue, DoubleValue, IntValue, Object, StringValue};
use holdfast_vector::ObjectVector;
use serde_json::{Map, Number, Value};

use crate::config::ResourceConfig;
use crate::dictionary::Dictionary;
use crate::error::ResourceLoadError;

/// Builds object vectors from JSON resources.
#[derive(Clone, Debug, Default)]
pub struct ResourceLoader {
    config: ResourceConfig,
}

impl ResourceLoader {
    /// Create a loader with the given limits.
    pub fn new(config: ResourceConfig) -> Self {
        Self { config }
    }

    /// The limits this loader applies.
    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    /// Load the resource file at `path`.
    ///
    /// Files larger than [`ResourceConfig::max_file_bytes`] are rejected
    /// before they are read.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<ObjectVector, ResourceLoadError> {
        let path = path.as_ref();
        log::debug!("loading resource {}", path.display());
        let result = self.read_file(path);
        match &result {
            Ok(vector) => log::debug!(
                "loaded {} top-level objects from {}",
                vector.count(),
                path.display()
            ),
            Err(e) => log::warn!("failed to load resource {}: {e}", path.display()),
        }
        result
    }

    /// Load a resource from any byte stream.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<ObjectVector, ResourceLoadError> {
        let document: Value = serde_json::from_reader(reader)?;
        self.build(document)
    }

    /// Load a resource from an in-memory document.
    pub fn load_str(&self, text: &str) -> Result<ObjectVector, ResourceLoadError> {
        let document: Value = serde_json::from_str(text)?;
        self.build(document)
    }

    fn read_file(&self, path: &Path) -> Result<ObjectVector, ResourceLoadError> {
        let metadata = fs::metadata(path).map_err(|e| ResourceLoadError::from_io(path, e))?;
        let limit = self.config.max_file_bytes;
        if metadata.len() > limit {
            return Err(ResourceLoadError::TooLarge {
                bytes: metadata.len(),
                limit,
            });
        }
        let file = File::open(path).map_err(|e| ResourceLoadError::from_io(path, e))?;
        self.load_reader(BufReader::new(file))
            .map_err(|e| e.at_path(path))
    }

    fn build(&self, document: Value) -> Result<ObjectVector, ResourceLoadError> {
        match document {
            Value::Array(items) => self.build_sequence(items, 1, &mut String::new()),
            other => Err(ResourceLoadError::RootNotSequence {
                found: kind_of(&other),
            }),
        }
    }

    // `pointer` is the JSON pointer of the container being built; children
    // push their own segment and pop it when done.

    fn build_sequence(
        &self,
        items: Vec<Value>,
        depth: usize,
        pointer: &mut String,
    ) -> Result<ObjectVector, ResourceLoadError> {
        self.check_depth(depth)?;
        let mut vector = ObjectVector::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let mark = pointer.len();
            pointer.push('/');
            pointer.push_str(&index.to_string());
            vector.append(self.build_value(item, depth, pointer)?);
            pointer.truncate(mark);
        }
        Ok(vector)
    }

    fn build_dictionary(
        &self,
        entries: Map<String, Value>,
        depth: usize,
        pointer: &mut String,
    ) -> Result<Dictionary, ResourceLoadError> {
        self.check_depth(depth)?;
        let mut dictionary = Dictionary::with_capacity(entries.len());
        for (key, item) in entries {
            let mark = pointer.len();
            pointer.push('/');
            push_escaped(pointer, &key);
            let object = self.build_value(item, depth, pointer)?;
            dictionary.insert(key, object);
            pointer.truncate(mark);
        }
        Ok(dictionary)
    }

    /// Build the object for `value`, a child of a container at `depth`.
    fn build_value(
        &self,
        value: Value,
        depth: usize,
        pointer: &mut String,
    ) -> Result<Rc<dyn Object>, ResourceLoadError> {
        let object: Rc<dyn Object> = match value {
            Value::Null => {
                return Err(ResourceLoadError::NullValue {
                    pointer: pointer.clone(),
                })
            }
            Value::Bool(b) => BoolValue::shared(b),
            Value::Number(n) => number_object(&n),
            Value::String(s) => StringValue::shared(s),
            Value::Array(items) => Rc::new(self.build_sequence(items, depth + 1, pointer)?),
            Value::Object(entries) => {
                Rc::new(self.build_dictionary(entries, depth + 1, pointer)?)
            }
        };
        Ok(object)
    }

    fn check_depth(&self, depth: usize) -> Result<(), ResourceLoadError> {
        if depth > self.config.max_depth {
            return Err(ResourceLoadError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }
}

/// Load the resource file at `path` with default limits.
///
/// Shorthand for `ResourceLoader::default().load_path(path)`.
pub fn load_vector(path: impl AsRef<Path>) -> Result<ObjectVector, ResourceLoadError> {
    ResourceLoader::default().load_path(path)
}

fn number_object(n: &Number) -> Rc<dyn Object> {
    match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => IntValue::shared(i),
        (None, Some(f)) => DoubleValue::shared(f),
        // Only reachable with arbitrary-precision numbers.
        (None, None) => StringValue::shared(n.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Append `key` as a JSON pointer segment (RFC 6901).
fn push_escaped(pointer: &mut String, key: &str) {
    for c in key.chars() {
        match c {
            '~' => pointer.push_str("~0"),
            '/' => pointer.push_str("~1"),
            c => pointer.push(c),
        }
    }
}
