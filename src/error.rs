use alloc::string::{String, ToString};

/// Errors from coercing inputs into pose values.
///
/// Operations that return a `PoseError` leave their receiver unchanged.
///
/// ```
/// use poser::{PoseError, RotationMatrix};
///
/// let mut m = RotationMatrix::<f64>::identity();
/// let err = m.set_nested([["1", "0", "0"], ["0", "one", "0"], ["0", "0", "1"]]).unwrap_err();
/// assert_eq!(err, PoseError::Conversion { input: "one".into() });
/// assert_eq!(m, RotationMatrix::identity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoseError {
    /// A field input could not be coerced to a floating-point number.
    Conversion {
        /// The rejected input, as written.
        input: String,
    },
    /// A nested sequence had the wrong number of rows.
    RowCount { expected: usize, found: usize },
    /// A row of a nested sequence had the wrong number of entries.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl PoseError {
    pub(crate) fn conversion(input: impl core::fmt::Display) -> Self {
        PoseError::Conversion {
            input: input.to_string(),
        }
    }
}

impl core::fmt::Display for PoseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PoseError::Conversion { input } => {
                write!(f, "cannot convert {:?} to a floating-point number", input)
            }
            PoseError::RowCount { expected, found } => {
                write!(f, "expected {} rows, found {}", expected, found)
            }
            PoseError::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                row, found, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PoseError {}

/// Result alias for fallible pose operations.
pub type PoseResult<T> = core::result::Result<T, PoseError>;
