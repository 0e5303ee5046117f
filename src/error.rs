use thiserror::Error;

pub type Result<T = (), E = RegAccessError> = std::result::Result<T, E>;

/// One variant per underlying registry primitive, plus the path resolution
/// error. The payload string carries the location and the OS-level cause.
#[derive(Error, Debug, Clone)]
pub enum RegAccessError {
    #[error("Unrecognized root prefix: {0}")]
    UnknownRootPrefix(String),

    #[error("Failed to create registry key: {0}")]
    CreateKeyFailed(String),

    #[error("Failed to set registry value: {0}")]
    SetValueFailed(String),

    #[error("Failed to open registry key: {0}")]
    OpenKeyFailed(String),

    #[error("Failed to delete registry key: {0}")]
    DeleteKeyFailed(String),

    #[error("Failed to delete registry value: {0}")]
    DeleteValueFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_location() {
        let err = RegAccessError::DeleteKeyFailed("HKCU\\Software\\Test: access denied".into());
        assert_eq!(
            err.to_string(),
            "Failed to delete registry key: HKCU\\Software\\Test: access denied"
        );
    }
}
