/// Longest input line accepted, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// Room for one token per input byte plus the End sentinel.
pub const DEFAULT_CAPACITY: usize = DEFAULT_MAX_LINE_LENGTH + 1;

/// Deepest expression tree accepted. Evaluation, rendering and dropping a
/// tree recurse once per level.
pub const DEFAULT_MAX_DEPTH: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of elements held by the token queue, the operator
    /// stack and the operand stack.
    pub capacity: usize,
    /// Maximum input length in bytes.
    pub max_line_length: usize,
    /// Maximum nesting depth of the expression tree.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn new(capacity: Option<usize>, max_line_length: Option<usize>) -> Self {
        let defaults = Config::default();

        Config {
            capacity: capacity.unwrap_or(defaults.capacity),
            max_line_length: max_line_length.unwrap_or(defaults.max_line_length),
            max_depth: defaults.max_depth,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Config { max_depth, ..self }
    }
}
