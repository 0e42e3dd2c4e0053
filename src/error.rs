/// Errors raised when building a word generator.
///
/// Enumeration itself never fails; every check happens when a configuration
/// or builder is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordGenError {
    #[error("word length must be non-negative, got {0}")]
    NegativeLength(i64),
    #[error("word length {length} exceeds the maximum of {max}")]
    WordTooLong { length: usize, max: usize },
    #[error("{symbols} symbols at length {length} produce more than {max} words")]
    TooManyWords {
        symbols: usize,
        length: usize,
        max: usize,
    },
}
