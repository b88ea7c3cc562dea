/// Bounds applied to a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length in characters, counted after whitespace is removed.
    pub max_length: usize,
    /// Maximum parser recursion depth.
    pub max_depth: usize,
}

impl Limits {
    pub const DEFAULT_MAX_LENGTH: usize = 4096;
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Limits;

    #[test]
    fn builder_overrides_defaults() {
        let limits = Limits::default().with_max_length(10).with_max_depth(3);
        assert_eq!(limits.max_length, 10);
        assert_eq!(limits.max_depth, 3);
        assert_eq!(Limits::default().max_depth, Limits::DEFAULT_MAX_DEPTH);
    }
}
