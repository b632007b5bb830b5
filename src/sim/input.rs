//! Keyboard and pointer input, folded into one movement intent per tick

use serde::{Deserialize, Serialize};

/// Logical direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What the sled should do this tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    #[default]
    Idle,
    /// Move left at full speed for `dt`
    Left,
    /// Move right at full speed for `dt`
    Right,
    /// Jump to an absolute stage x (pointer/touch)
    PointAt(f32),
}

/// Tracks held keys and the latest pointer position between ticks
///
/// Whichever kind of event arrived last since the previous tick decides the
/// intent; keys and pointer never combine within one tick.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    left_held: bool,
    right_held: bool,
    /// Pointer target that has not been applied yet
    pending_pointer: Option<f32>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for keys that are not bound
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, held: bool) -> bool {
        let Some(direction) = Direction::from_key(key) else {
            return false;
        };
        match direction {
            Direction::Left => self.left_held = held,
            Direction::Right => self.right_held = held,
        }
        // A key event after a pointer move takes over
        self.pending_pointer = None;
        true
    }

    /// Stage-relative pointer or touch x
    pub fn pointer_move(&mut self, x: f32) {
        if x.is_finite() {
            self.pending_pointer = Some(x);
        }
    }

    /// Produce this tick's intent, consuming any pending pointer target
    pub fn take_intent(&mut self) -> MoveIntent {
        if let Some(x) = self.pending_pointer.take() {
            return MoveIntent::PointAt(x);
        }
        // Right wins when both are held
        if self.right_held {
            MoveIntent::Right
        } else if self.left_held {
            MoveIntent::Left
        } else {
            MoveIntent::Idle
        }
    }

    /// Forget all held keys and pointer moves
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
