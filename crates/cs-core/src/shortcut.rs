//! Paste shortcut slots.
//!
//! Nine independently bindable triggers, slot `n` pasting history entry `n - 1`.
//! Registering the accelerators with the OS is left to the presentation shell;
//! this module only describes them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::clipboard::HISTORY_CAPACITY;

/// macOS virtual key codes for the digit row keys 1..=9.
pub const MAC_DIGIT_KEY_CODES: [u16; HISTORY_CAPACITY] = [18, 19, 20, 21, 23, 22, 26, 28, 25];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutParseError {
    #[error("paste slot must be between 1 and {max}, got {slot}")]
    SlotOutOfRange { slot: u32, max: usize },

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("shortcut `{0}` does not end in a digit key")]
    MissingKey(String),
}

/// A 1-based paste slot, valid for 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PasteSlot(u8);

impl PasteSlot {
    pub fn new(slot: u32) -> Result<Self, ShortcutParseError> {
        if slot == 0 || slot as usize > HISTORY_CAPACITY {
            return Err(ShortcutParseError::SlotOutOfRange {
                slot,
                max: HISTORY_CAPACITY,
            });
        }
        Ok(Self(slot as u8))
    }

    /// All slots in order 1..=9.
    pub fn all() -> impl Iterator<Item = PasteSlot> {
        (1..=HISTORY_CAPACITY as u8).map(PasteSlot)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based history index this slot pastes.
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for PasteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PasteSlot {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ShortcutParseError::MissingKey(s.to_string()))?;
        PasteSlot::new(slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modifier {
    Command,
    Shift,
    Control,
    Option,
}

impl Modifier {
    fn as_str(self) -> &'static str {
        match self {
            Modifier::Command => "cmd",
            Modifier::Shift => "shift",
            Modifier::Control => "ctrl",
            Modifier::Option => "alt",
        }
    }

    /// Parse a `+`-separated modifier list such as `"cmd+shift"`.
    pub fn parse_list(list: &str) -> Result<Vec<Modifier>, ShortcutParseError> {
        list.split('+')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Modifier {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cmd" | "command" | "meta" | "super" => Ok(Modifier::Command),
            "shift" => Ok(Modifier::Shift),
            "ctrl" | "control" => Ok(Modifier::Control),
            "alt" | "opt" | "option" => Ok(Modifier::Option),
            _ => Err(ShortcutParseError::UnknownModifier(s.to_string())),
        }
    }
}

/// Accelerator bound to one paste slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutBinding {
    pub slot: PasteSlot,
    pub modifiers: Vec<Modifier>,
}

impl ShortcutBinding {
    pub fn new(slot: PasteSlot, modifiers: Vec<Modifier>) -> Self {
        Self { slot, modifiers }
    }

    /// Digit key that triggers this slot.
    pub fn key(&self) -> char {
        char::from(b'0' + self.slot.number())
    }

    pub fn mac_key_code(&self) -> u16 {
        MAC_DIGIT_KEY_CODES[self.slot.index()]
    }

    /// Command+Shift+1 ..= Command+Shift+9.
    pub fn defaults() -> Vec<ShortcutBinding> {
        Self::with_modifiers(&[Modifier::Command, Modifier::Shift])
    }

    pub fn with_modifiers(modifiers: &[Modifier]) -> Vec<ShortcutBinding> {
        PasteSlot::all()
            .map(|slot| ShortcutBinding::new(slot, modifiers.to_vec()))
            .collect()
    }
}

impl fmt::Display for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        write!(f, "{}", self.key())
    }
}

impl FromStr for ShortcutBinding {
    type Err = ShortcutParseError;

    /// Parse `"cmd+shift+3"`; the last segment is the slot digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (modifiers, key) = match s.rsplit_once('+') {
            Some((modifiers, key)) => (modifiers, key),
            None => ("", s),
        };
        if key.trim().is_empty() {
            return Err(ShortcutParseError::MissingKey(s.to_string()));
        }
        let slot = key.parse::<PasteSlot>()?;
        Ok(ShortcutBinding::new(slot, Modifier::parse_list(modifiers)?))
    }
}
