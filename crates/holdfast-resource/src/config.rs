//! Resource loader configuration.

/// Limits applied while loading a resource.
///
/// Both limits guard against hostile or corrupt files: `max_depth` bounds
/// recursion while building nested containers, `max_file_bytes` bounds the
/// memory spent before parsing starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Maximum container nesting depth. The root sequence is depth 1.
    ///
    /// Default: 64.
    pub max_depth: usize,

    /// Largest file [`load_path`](crate::ResourceLoader::load_path) will
    /// open, in bytes. Readers and strings are not size-checked.
    ///
    /// Default: 16 MiB.
    pub max_file_bytes: u64,
}

impl ResourceConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Default file size limit: 16 MiB.
    pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

    /// Create a config with default limits.
    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_file_bytes: Self::DEFAULT_MAX_FILE_BYTES,
        }
    }

    /// Replace the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the file size limit.
    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::new()
    }
}
