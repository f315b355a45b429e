//! Raw input to game intents
//!
//! Hosts forward whatever the device produces; this module decides which of
//! those mean "jump" and which mean "restart". Everything else is dropped.

use serde::{Deserialize, Serialize};

/// Keyboard keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    ArrowUp,
    Enter,
    R,
    Other,
}

/// Device-level input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Tap/click anywhere on the field
    Tap,
    /// Drag in progress; `dy` is the vertical translation (negative = up)
    Drag { dy: f32 },
    /// Rotary input (watch crown, scroll wheel)
    Crown { velocity: f64 },
    Key(Key),
    /// The game-over prompt was dismissed
    DismissGameOver,
}

/// What the player wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Jump,
    Restart,
}

/// Map a gesture to an intent
pub fn intent_for(gesture: Gesture) -> Option<Intent> {
    match gesture {
        Gesture::Tap => Some(Intent::Jump),
        // Upward swipe only
        Gesture::Drag { dy } if dy < 0.0 => Some(Intent::Jump),
        Gesture::Drag { .. } => None,
        Gesture::Crown { velocity } if velocity != 0.0 => Some(Intent::Jump),
        Gesture::Crown { .. } => None,
        Gesture::Key(Key::Space | Key::ArrowUp) => Some(Intent::Jump),
        Gesture::Key(Key::Enter | Key::R) => Some(Intent::Restart),
        Gesture::Key(Key::Other) => None,
        Gesture::DismissGameOver => Some(Intent::Restart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_gestures() {
        assert_eq!(intent_for(Gesture::Tap), Some(Intent::Jump));
        assert_eq!(intent_for(Gesture::Drag { dy: -12.0 }), Some(Intent::Jump));
        assert_eq!(intent_for(Gesture::Crown { velocity: -0.3 }), Some(Intent::Jump));
        assert_eq!(intent_for(Gesture::Key(Key::Space)), Some(Intent::Jump));
        assert_eq!(intent_for(Gesture::Key(Key::ArrowUp)), Some(Intent::Jump));
    }

    #[test]
    fn test_ignored_gestures() {
        assert_eq!(intent_for(Gesture::Drag { dy: 0.0 }), None);
        assert_eq!(intent_for(Gesture::Drag { dy: 8.0 }), None);
        assert_eq!(intent_for(Gesture::Crown { velocity: 0.0 }), None);
        assert_eq!(intent_for(Gesture::Key(Key::Other)), None);
    }

    #[test]
    fn test_restart_gestures() {
        assert_eq!(intent_for(Gesture::DismissGameOver), Some(Intent::Restart));
        assert_eq!(intent_for(Gesture::Key(Key::Enter)), Some(Intent::Restart));
        assert_eq!(intent_for(Gesture::Key(Key::R)), Some(Intent::Restart));
    }
}
