pub type Result<T> = std::result::Result<T, crate::error::Error>;

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

/// Checks `index` against the logical length of a sequence.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, len }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn checked(len: usize) -> Result<usize> {
        verify_arg!(len, len > 2);
        Ok(len)
    }

    #[test]
    fn test_verify_arg_macro() {
        assert_eq!(checked(3).unwrap(), 3);
        let e = checked(1).unwrap_err();
        assert_eq!(
            e.into_kind(),
            ErrorKind::InvalidArgument {
                name: "len".to_string(),
                message: "len > 2".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_index() {
        assert!(verify_index(0, 1).is_ok());
        assert!(verify_index(1, 1).unwrap_err().is_out_of_range());
        assert!(verify_index(0, 0).is_err());
    }
}
