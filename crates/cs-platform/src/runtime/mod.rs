mod polling;

pub use polling::PollingClipboardRuntime;
