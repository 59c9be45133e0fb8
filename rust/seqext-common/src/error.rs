use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn empty_input(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyInput {
                operation: operation.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised by parameter validation.
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    /// Returns `true` if this error reports an operation over an empty sequence.
    pub fn is_empty_input(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyInput { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{operation} is undefined for an empty sequence")]
    EmptyInput { operation: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arg_display() {
        let err = Error::invalid_arg("size", "size > 0");
        assert!(err.is_invalid_arg());
        assert!(!err.is_empty_input());
        assert_eq!(err.to_string(), "invalid argument size: size > 0");
    }

    #[test]
    fn test_empty_input_display() {
        let err = Error::empty_input("sum");
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "sum is undefined for an empty sequence");
        match err.into_kind() {
            ErrorKind::EmptyInput { operation } => assert_eq!(operation, "sum"),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
