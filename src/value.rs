//! Typed registry values.

use serde::{Deserialize, Serialize};

/// A registry payload and its value type as one tagged variant, so the type
/// tag can never disagree with the data it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Data {
    /// REG_SZ
    String(String),
    /// REG_EXPAND_SZ
    ExpandString(String),
    /// REG_DWORD
    Dword(u32),
}

impl Data {
    /// Byte length of the stored payload: nul-terminated UTF-16 for strings,
    /// four bytes for a dword.
    pub fn byte_len(&self) -> usize {
        match self {
            Data::String(s) | Data::ExpandString(s) => (s.encode_utf16().count() + 1) * 2,
            Data::Dword(_) => std::mem::size_of::<u32>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Data::String(_) => "REG_SZ",
            Data::ExpandString(_) => "REG_EXPAND_SZ",
            Data::Dword(_) => "REG_DWORD",
        }
    }

    #[cfg(windows)]
    pub(crate) fn to_reg_value(&self) -> winreg::RegValue {
        use winreg::enums::{REG_DWORD, REG_EXPAND_SZ, REG_SZ};

        let (bytes, vtype) = match self {
            Data::String(s) => (wide_bytes(s), REG_SZ),
            Data::ExpandString(s) => (wide_bytes(s), REG_EXPAND_SZ),
            Data::Dword(v) => (v.to_le_bytes().to_vec(), REG_DWORD),
        };
        winreg::RegValue { bytes, vtype }
    }
}

/// Nul-terminated UTF-16LE bytes, the shape string values take in the registry.
#[cfg(windows)]
fn wide_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}
