use thiserror::Error;

/// Structured, recoverable solver faults.
///
/// Both kinds carry the text that was being examined when the fault was found
/// (the full expression, or the substring a recursive parse step worked on)
/// together with a character offset into it, so the front end can render a
/// caret-pointer diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("InvalidBracket: {message}")]
    InvalidBracket {
        expression: String,
        idx: usize,
        message: String,
    },

    #[error("InvalidCharacter: {message}")]
    InvalidCharacter {
        expression: String,
        idx: usize,
        message: String,
    },
}

impl SolverError {
    pub fn invalid_bracket(chars: &[char], idx: usize, message: &str) -> Self {
        Self::InvalidBracket {
            expression: chars.iter().collect(),
            idx,
            message: message.to_string(),
        }
    }

    pub fn invalid_character(chars: &[char], idx: usize, message: &str) -> Self {
        Self::InvalidCharacter {
            expression: chars.iter().collect(),
            idx,
            message: message.to_string(),
        }
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidBracket { .. } => "InvalidBracket",
            Self::InvalidCharacter { .. } => "InvalidCharacter",
        }
    }

    pub fn expression(&self) -> &str {
        match self {
            Self::InvalidBracket { expression, .. } | Self::InvalidCharacter { expression, .. } => {
                expression
            }
        }
    }

    pub const fn idx(&self) -> usize {
        match self {
            Self::InvalidBracket { idx, .. } | Self::InvalidCharacter { idx, .. } => *idx,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidBracket { message, .. } | Self::InvalidCharacter { message, .. } => message,
        }
    }

    /// Caret-pointer rendering:
    ///
    /// ```text
    /// (p∧q
    /// ^
    /// InvalidBracket: missing matching closing bracket
    /// ```
    pub fn diagnostic(&self) -> String {
        format!(
            "{}\n{}^\n{}: {}\n",
            self.expression(),
            " ".repeat(self.idx()),
            self.kind_name(),
            self.message()
        )
    }
}
