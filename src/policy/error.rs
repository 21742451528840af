use std::fmt;

/// Structural problem in a policy document
///
/// Returned (wrapped in `anyhow::Error`) by [`super::parse_policy`] when an
/// element the tool must identify by name cannot be identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// An identifying `name` attribute is absent
    MissingName {
        /// Tag of the offending element (`layer`, `module`, ...)
        element: String,
        /// 1-based source row
        row: u32,
        /// 1-based source column
        col: u32,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::MissingName { element, row, col } => {
                write!(
                    f,
                    "<{}> element at {}:{} has no \"name\" attribute",
                    element, row, col
                )
            }
        }
    }
}

impl std::error::Error for PolicyError {}
