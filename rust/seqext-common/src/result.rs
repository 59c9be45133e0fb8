pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails the enclosing function with `ErrorKind::InvalidArgument` unless the
/// condition holds. The enclosing function must return `seqext_common::Result`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    log::debug!("rejected argument `{name}`: expected `{condition}`");
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    fn check_size(size: usize) -> crate::Result<usize> {
        verify_arg!(size, size > 0);
        Ok(size)
    }

    #[test]
    fn test_verify_arg_passes() {
        assert_eq!(check_size(3).unwrap(), 3);
    }

    #[test]
    fn test_verify_arg_fails() {
        let err = check_size(0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "size");
                assert_eq!(message, "size > 0");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
