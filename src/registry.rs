//! Core registry operations - thin wrapper over winreg.
//!
//! Each operation is one linear pass: resolve the predefined root handle, run
//! a single registry primitive, and map its failure into [`RegAccessError`].
//! Key handles are `RegKey` values and close when dropped, on every exit path.

use tracing::debug;
use winreg::enums::KEY_ALL_ACCESS;
use winreg::RegKey;

use crate::error::{RegAccessError, Result};
use crate::path::RegPath;
use crate::value::Data;

/// Store `data` under `name`, creating the subkey (non-volatile, writable) if
/// it does not exist yet.
///
/// # Errors
///
/// Returns `CreateKeyFailed` if the subkey cannot be created or opened, and
/// `SetValueFailed` if the value cannot be stored.
pub fn set_value(path: &RegPath, name: &str, data: &Data) -> Result {
    let (key, _) = RegKey::predef(path.root.hkey())
        .create_subkey(&path.subkey)
        .map_err(|e| RegAccessError::CreateKeyFailed(format!("{}: {}", path, e)))?;

    key.set_raw_value(name, &data.to_reg_value())
        .map_err(|e| RegAccessError::SetValueFailed(format!("{}\\{}: {}", path, name, e)))?;

    debug!(path = %path, name, vtype = data.type_name(), "registry value written");
    Ok(())
}

/// Delete the subkey itself. The underlying primitive is non-recursive and
/// fails while child keys remain.
///
/// # Errors
///
/// Returns `DeleteKeyFailed` if the subkey is absent, still has children, or
/// access is denied.
pub fn delete_key(path: &RegPath) -> Result {
    RegKey::predef(path.root.hkey())
        .delete_subkey(&path.subkey)
        .map_err(|e| RegAccessError::DeleteKeyFailed(format!("{}: {}", path, e)))?;

    debug!(path = %path, "registry key deleted");
    Ok(())
}

/// Delete the named value inside the subkey, leaving sibling values in place.
///
/// # Errors
///
/// Returns `OpenKeyFailed` if the subkey cannot be opened with full access,
/// and `DeleteValueFailed` if the named value cannot be removed.
pub fn delete_value(path: &RegPath, name: &str) -> Result {
    let key = RegKey::predef(path.root.hkey())
        .open_subkey_with_flags(&path.subkey, KEY_ALL_ACCESS)
        .map_err(|e| RegAccessError::OpenKeyFailed(format!("{}: {}", path, e)))?;

    key.delete_value(name)
        .map_err(|e| RegAccessError::DeleteValueFailed(format!("{}\\{}: {}", path, name, e)))?;

    debug!(path = %path, name, "registry value deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::RootKey;

    fn scratch(leaf: &str) -> RegPath {
        RegPath::new(
            RootKey::CurrentUser,
            format!("Software\\reg-access-tests\\{}", leaf),
        )
    }

    fn open(path: &RegPath) -> RegKey {
        RegKey::predef(path.root.hkey())
            .open_subkey(&path.subkey)
            .unwrap()
    }

    #[test]
    fn test_string_value_round_trip() {
        let path = scratch("string");
        let data = Data::String("Hello".into());
        set_value(&path, "Name", &data).unwrap();

        let raw = open(&path).get_raw_value("Name").unwrap();
        assert_eq!(raw.bytes.len(), data.byte_len());
        assert_eq!(raw.bytes, data.to_reg_value().bytes);

        delete_value(&path, "Name").unwrap();
        delete_key(&path).unwrap();
    }

    #[test]
    fn test_dword_value_round_trip() {
        let path = scratch("dword");
        set_value(&path, "Count", &Data::Dword(0xDEAD_BEEF)).unwrap();

        let raw = open(&path).get_raw_value("Count").unwrap();
        assert_eq!(raw.bytes, 0xDEAD_BEEFu32.to_le_bytes());

        delete_key(&path).unwrap();
    }

    #[test]
    fn test_delete_value_leaves_siblings() {
        let path = scratch("siblings");
        set_value(&path, "Keep", &Data::Dword(1)).unwrap();
        set_value(&path, "Drop", &Data::Dword(2)).unwrap();

        delete_value(&path, "Drop").unwrap();

        let key = open(&path);
        assert!(key.get_raw_value("Drop").is_err());
        assert!(key.get_raw_value("Keep").is_ok());
        drop(key);

        delete_value(&path, "Keep").unwrap();
        delete_key(&path).unwrap();
    }

    #[test]
    fn test_delete_key_with_children_fails() {
        let parent = scratch("parent");
        let child = scratch("parent\\child");
        set_value(&child, "V", &Data::Dword(1)).unwrap();

        assert!(matches!(
            delete_key(&parent),
            Err(RegAccessError::DeleteKeyFailed(_))
        ));

        delete_key(&child).unwrap();
        delete_key(&parent).unwrap();
    }

    #[test]
    fn test_delete_value_on_missing_key_is_open_error() {
        let path = scratch("does-not-exist");
        assert!(matches!(
            delete_value(&path, "Name"),
            Err(RegAccessError::OpenKeyFailed(_))
        ));
    }
}
