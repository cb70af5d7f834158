/// Capacity of the state buffer tree-sitter hands to external scanners.
pub const TREE_SITTER_SERIALIZATION_BUFFER_SIZE: usize = 1024;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScannerSettings {
    /// Number of open elements the tag stack preallocates room for.
    pub stack_capacity: usize,
    /// Capacity of the buffer produced by [`Scanner::serialize_to_vec`].
    ///
    /// [`Scanner::serialize_to_vec`]: crate::Scanner::serialize_to_vec
    pub state_buffer_capacity: usize,
}

impl Default for ScannerSettings {
    #[inline]
    fn default() -> Self {
        ScannerSettings {
            stack_capacity: 256,
            state_buffer_capacity: TREE_SITTER_SERIALIZATION_BUFFER_SIZE,
        }
    }
}
