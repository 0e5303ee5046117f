//! Failure reporting seam.
//!
//! The legacy surface reports failures to the interactive desktop instead of
//! the caller; tests substitute a recording implementation.

/// Receives the short diagnostic string describing a failed operation.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Blocking modal message box titled "error". Suspends the calling thread
/// until a human dismisses it.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxNotifier;

#[cfg(windows)]
impl Notifier for MessageBoxNotifier {
    fn notify(&self, message: &str) {
        use windows::core::{s, PCSTR};
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxA, MB_ICONERROR};

        // MessageBoxA wants a nul-terminated ANSI buffer; keep the ASCII
        // subset of the diagnostic.
        let mut text: Vec<u8> = message.bytes().filter(u8::is_ascii).collect();
        text.push(0);

        unsafe {
            MessageBoxA(
                None,
                PCSTR::from_raw(text.as_ptr()),
                s!("error"),
                MB_ICONERROR,
            );
        }
    }
}
