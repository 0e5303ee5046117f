//! Root prefix resolution for registry paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RegAccessError, Result};

/// One of the registry's top-level namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootKey {
    /// HKEY_CURRENT_USER
    CurrentUser,
    /// HKEY_LOCAL_MACHINE
    LocalMachine,
    /// HKEY_CLASSES_ROOT
    ClassesRoot,
}

// Recognized prefixes in match order. Each is exactly five characters and the
// comparison is literal and case-sensitive.
const PREFIXES: [(&str, RootKey); 3] = [
    ("HKCU\\", RootKey::CurrentUser),
    ("HKLM\\", RootKey::LocalMachine),
    ("HKCR\\", RootKey::ClassesRoot),
];

impl RootKey {
    pub fn prefix(self) -> &'static str {
        match self {
            RootKey::CurrentUser => "HKCU\\",
            RootKey::LocalMachine => "HKLM\\",
            RootKey::ClassesRoot => "HKCR\\",
        }
    }

    #[cfg(windows)]
    pub(crate) fn hkey(self) -> winreg::HKEY {
        use winreg::enums::{HKEY_CLASSES_ROOT, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

        match self {
            RootKey::CurrentUser => HKEY_CURRENT_USER,
            RootKey::LocalMachine => HKEY_LOCAL_MACHINE,
            RootKey::ClassesRoot => HKEY_CLASSES_ROOT,
        }
    }
}

/// A resolved registry location: root namespace plus the subkey path below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegPath {
    pub root: RootKey,
    pub subkey: String,
}

impl RegPath {
    pub fn new(root: RootKey, subkey: impl Into<String>) -> Self {
        Self {
            root,
            subkey: subkey.into(),
        }
    }

    /// Resolve `<prefix><subkey>` against the known root prefixes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRootPrefix` if the first five characters match none of
    /// `HKCU\`, `HKLM\`, `HKCR\`.
    pub fn parse(path: &str) -> Result<Self> {
        for (prefix, root) in PREFIXES {
            if let Some(subkey) = path.strip_prefix(prefix) {
                return Ok(Self::new(root, subkey));
            }
        }
        Err(RegAccessError::UnknownRootPrefix(path.to_string()))
    }

    /// Legacy resolution: an unmatched prefix falls back to `CurrentUser` and
    /// the whole input, untouched, becomes the subkey. A typo'd prefix thus
    /// lands under HKCU instead of failing; prefer [`RegPath::parse`] where
    /// the caller can handle an error.
    #[must_use]
    pub fn parse_or_default(path: &str) -> Self {
        Self::parse(path).unwrap_or_else(|_| Self::new(RootKey::CurrentUser, path))
    }
}

impl fmt::Display for RegPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.prefix(), self.subkey)
    }
}
