mod enigo_keystroke;
#[cfg(target_os = "macos")]
pub mod macos;

pub use enigo_keystroke::EnigoPasteKeystroke;

/// Whether the process may post synthetic input events.
///
/// Always `true` outside macOS, where no per-app permission exists.
pub fn has_input_permission() -> bool {
    #[cfg(target_os = "macos")]
    {
        macos::has_accessibility_access()
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
