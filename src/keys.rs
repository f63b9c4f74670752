//! Symbolic key codes and chords sent to the keyboard synthesizer

use serde::Serialize;
use std::fmt;

/// A virtual key understood by the keyboard-synthesis subsystem.
///
/// Names follow the Windows virtual-key vocabulary (`LMenu` is the left Alt
/// key, `D0` is the `0` key on the main row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    /// Left Control
    LControlKey,
    /// Left Alt
    LMenu,
    /// Letter A
    A,
    /// Letter F
    F,
    /// Letter L
    L,
    /// Main-row 0
    D0,
    /// Numeric keypad plus
    Add,
    /// Numeric keypad minus
    Subtract,
    /// Right arrow
    Right,
    /// Dedicated browser Back key
    BrowserBack,
}

impl Key {
    /// Canonical name of the key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LControlKey => "LControlKey",
            Self::LMenu => "LMenu",
            Self::A => "A",
            Self::F => "F",
            Self::L => "L",
            Self::D0 => "D0",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Right => "Right",
            Self::BrowserBack => "BrowserBack",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A modifier held down while a second key is pressed, sent as one unit.
///
/// The synthesizer presses `modifier`, presses and releases `key`, then
/// releases `modifier`. Two chords are never interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Chord {
    /// Held key
    pub modifier: Key,
    /// Key pressed while the modifier is held
    pub key: Key,
}

impl Chord {
    /// Create a chord from a modifier and a key
    #[must_use]
    pub const fn new(modifier: Key, key: Key) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.modifier, self.key)
    }
}

impl From<Chord> for String {
    fn from(chord: Chord) -> Self {
        chord.to_string()
    }
}
