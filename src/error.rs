//! Error types shared by the persistence engine and the I/O helpers.

/// Library-wide error for `topf`.
#[derive(Debug, thiserror::Error)]
pub enum TopfError {
    /// The input sequence contained no samples.
    #[error("invalid input: the sample sequence is empty")]
    EmptyInput,

    /// The input was not shaped as (x, y) pairs.
    #[error("invalid input: expected samples shaped as (x, y) pairs, got {rows} rows with {cols} columns")]
    MalformedShape { rows: usize, cols: usize },

    /// A function value was NaN or infinite; the sweep needs a total order on heights.
    #[error("invalid input: non-finite function value at sample {index}")]
    NonFiniteInput { index: usize },

    /// `n_peaks` was set to zero.
    #[error("invalid configuration: n_peaks must be a positive integer")]
    InvalidPeakCount,

    /// `total_persistence` was called with a non-positive or non-finite exponent.
    #[error("invalid exponent p = {p}: total persistence requires p > 0")]
    InvalidExponent { p: f64 },

    /// A numeric parameter outside its valid range.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A line of a text table had more columns than an (x, y) pair.
    #[error("line {line}: expected one or two columns, got {cols}")]
    TooManyColumns { line: usize, cols: usize },

    /// A token in a text table could not be read as a number.
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TopfError>;
