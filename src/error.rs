use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError, PartialEq, Eq, Clone)]
pub enum Error {
    /// The requested key is not stored in the tree.
    ///
    /// Returned by lookups and deletes alike; deleting an absent key is never a
    /// silent no-op.
    #[error("key not found")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_message() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn test_result_defaults_to_crate_error() {
        let result: Result<()> = Err(Error::KeyNotFound);
        assert!(matches!(result, Err(Error::KeyNotFound)));
    }
}
