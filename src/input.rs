//! Logical key events and held-direction intent
//!
//! Device capture lives in the host; the core only sees these discrete events.

/// A single discrete input event, delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    MoveLeftStart,
    MoveLeftEnd,
    MoveRightStart,
    MoveRightEnd,
    Jump,
    Backspace,
    Letter(char),
    PauseToggle,
    Start,
    Restart,
}

/// Held-direction snapshot rebuilt from move start/end events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    /// Fold a move event into the snapshot. Returns false for non-move events.
    pub fn apply(&mut self, event: KeyEvent) -> bool {
        match event {
            KeyEvent::MoveLeftStart => self.left = true,
            KeyEvent::MoveLeftEnd => self.left = false,
            KeyEvent::MoveRightStart => self.right = true,
            KeyEvent::MoveRightEnd => self.right = false,
            _ => return false,
        }
        true
    }

    /// -1 for left, 1 for right, 0 for neither. Left wins when both are held.
    pub fn direction(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Map a browser `KeyboardEvent.key` value to a key event.
///
/// Enter is a start request, or a restart request once the round is over.
pub fn key_from_dom(key: &str, pressed: bool, round_over: bool) -> Option<KeyEvent> {
    let event = match (key, pressed) {
        ("ArrowLeft", true) => KeyEvent::MoveLeftStart,
        ("ArrowLeft", false) => KeyEvent::MoveLeftEnd,
        ("ArrowRight", true) => KeyEvent::MoveRightStart,
        ("ArrowRight", false) => KeyEvent::MoveRightEnd,
        (_, false) => return None,
        (" ", true) => KeyEvent::Jump,
        ("Backspace", true) => KeyEvent::Backspace,
        ("Escape", true) => KeyEvent::PauseToggle,
        ("Enter", true) if round_over => KeyEvent::Restart,
        ("Enter", true) => KeyEvent::Start,
        (other, true) => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyEvent::Letter(c),
                _ => return None,
            }
        }
    };
    Some(event)
}
