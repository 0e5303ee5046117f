pub mod error;
pub mod notify;
pub mod path;
pub mod value;

#[cfg(windows)]
pub mod registry;
#[cfg(windows)]
pub mod service;

// Public, stable-ish API surface for consumers

pub use crate::error::{RegAccessError, Result};
pub use crate::notify::Notifier;
pub use crate::path::{RegPath, RootKey};
pub use crate::value::Data;

#[cfg(windows)]
pub use crate::notify::MessageBoxNotifier;

#[cfg(windows)]
pub use crate::service::{
    delete_key, delete_value, write_dword_value, write_expand_string_value, write_string_value,
};

pub mod prelude {
    pub use crate::error::{RegAccessError, Result};
    pub use crate::notify::Notifier;
    pub use crate::path::{RegPath, RootKey};
    pub use crate::value::Data;

    #[cfg(windows)]
    pub use crate::notify::MessageBoxNotifier;
    #[cfg(windows)]
    pub use crate::service::{
        delete_key, delete_value, write_dword_value, write_expand_string_value, write_string_value,
    };
}
