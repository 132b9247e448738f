/// Construction-time options shared by every collection in this crate.
///
/// All fields are hints: they affect allocation behaviour only, never what the collection stores or returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Number of elements to preallocate storage for.
    pub capacity: Option<usize>,
}

impl Config {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }
}

/// Preallocation used by the queue and the stack when no capacity hint is given.
pub(crate) const DEFAULT_SEQUENCE_CAPACITY: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_capacity_hint() {
        assert_eq!(None, Config::default().capacity);
        assert_eq!(Some(7), Config::with_capacity(7).capacity);
    }
}
