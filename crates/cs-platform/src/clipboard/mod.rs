mod change_counter;
mod common;
pub mod platform;

pub use change_counter::HashChangeCounter;
pub use common::CommonClipboardImpl;
pub use platform::LocalClipboard;
