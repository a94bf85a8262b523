use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, KeyEvent, KeyState};

/// Translates a winit keyboard event into an engine `KeyEvent`.
///
/// Returns `None` for every other window event.
pub(crate) fn translate_key_event(event: &WindowEvent) -> Option<KeyEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            Some(translate_key(event.physical_key, event.state))
        }
        _ => None,
    }
}

pub(crate) fn translate_key(physical: PhysicalKey, state: ElementState) -> KeyEvent {
    let state = match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    KeyEvent::new(map_key(physical), state)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(other) => Key::Other(other as u32),
        // NativeKeyCode carries no stable numeric in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unidentified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn escape_release_maps_to_escape() {
        let ev = translate_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Released);
        assert_eq!(ev, KeyEvent::new(Key::Escape, KeyState::Released));
    }

    #[test]
    fn other_keys_keep_their_code() {
        for code in [KeyCode::KeyQ, KeyCode::Enter, KeyCode::Space] {
            let ev = translate_key(PhysicalKey::Code(code), ElementState::Pressed);
            assert_eq!(ev, KeyEvent::new(Key::Other(code as u32), KeyState::Pressed));
        }
    }

    #[test]
    fn unidentified_key() {
        let ev = translate_key(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Released,
        );
        assert_eq!(ev.key, Key::Unidentified);
    }
}
