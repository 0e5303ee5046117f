//! Fire-and-forget convenience surface.
//!
//! These functions keep the legacy wrapper contract: resolve the root prefix
//! (falling back to HKCU on no match), run one registry primitive, and hand
//! any failure to a [`Notifier`] instead of the caller. Success is silent and
//! the call returns either way; callers wanting an observable outcome use
//! [`crate::registry`] directly.

use crate::error::Result;
use crate::notify::{MessageBoxNotifier, Notifier};
use crate::path::RegPath;
use crate::registry;
use crate::value::Data;

fn report_on_error(notifier: &dyn Notifier, outcome: Result) {
    if let Err(e) = outcome {
        notifier.notify(&e.to_string());
    }
}

/// Write a REG_SZ value under `path`, creating the key if needed. Failures
/// surface as a modal "error" message box.
pub fn write_string_value(path: &str, name: &str, value: &str) {
    write_string_value_with(&MessageBoxNotifier, path, name, value);
}

pub fn write_string_value_with(notifier: &dyn Notifier, path: &str, name: &str, value: &str) {
    let path = RegPath::parse_or_default(path);
    report_on_error(
        notifier,
        registry::set_value(&path, name, &Data::String(value.to_string())),
    );
}

/// Write a REG_EXPAND_SZ value under `path`, creating the key if needed.
pub fn write_expand_string_value(path: &str, name: &str, value: &str) {
    write_expand_string_value_with(&MessageBoxNotifier, path, name, value);
}

pub fn write_expand_string_value_with(
    notifier: &dyn Notifier,
    path: &str,
    name: &str,
    value: &str,
) {
    let path = RegPath::parse_or_default(path);
    report_on_error(
        notifier,
        registry::set_value(&path, name, &Data::ExpandString(value.to_string())),
    );
}

/// Write a REG_DWORD value under `path`, creating the key if needed.
pub fn write_dword_value(path: &str, name: &str, value: u32) {
    write_dword_value_with(&MessageBoxNotifier, path, name, value);
}

pub fn write_dword_value_with(notifier: &dyn Notifier, path: &str, name: &str, value: u32) {
    let path = RegPath::parse_or_default(path);
    report_on_error(notifier, registry::set_value(&path, name, &Data::Dword(value)));
}

/// Delete the key at `path`. Non-recursive; fails while child keys remain.
pub fn delete_key(path: &str) {
    delete_key_with(&MessageBoxNotifier, path);
}

pub fn delete_key_with(notifier: &dyn Notifier, path: &str) {
    let path = RegPath::parse_or_default(path);
    report_on_error(notifier, registry::delete_key(&path));
}

/// Delete the value `name` from the key at `path`, leaving siblings in place.
pub fn delete_value(path: &str, name: &str) {
    delete_value_with(&MessageBoxNotifier, path, name);
}

pub fn delete_value_with(notifier: &dyn Notifier, path: &str, name: &str) {
    let path = RegPath::parse_or_default(path);
    report_on_error(notifier, registry::delete_value(&path, name));
}
