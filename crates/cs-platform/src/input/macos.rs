//! macOS accessibility permission check.

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> bool;
}

/// Whether this process is trusted for accessibility, which macOS requires
/// before synthetic key events reach other applications.
pub fn has_accessibility_access() -> bool {
    unsafe { AXIsProcessTrusted() }
}
