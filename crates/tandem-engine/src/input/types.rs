/// Keyboard key identifier.
///
/// Only Escape gets a named variant; everything else is carried as `Other`
/// with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Other(u32),
    Unidentified,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A translated keyboard event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub const fn new(key: Key, state: KeyState) -> Self {
        Self { key, state }
    }
}
