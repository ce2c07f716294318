//! Coordinate and click primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point relative to a component, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Coordinates {
    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin, `(0, 0)`
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

/// A table cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index
    pub row: u32,
    /// Column index
    pub column: u32,
}

impl Cell {
    /// Create a new cell address
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Rendered as `row,column`, the form `createTableCell(s)` accepts.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Mouse button, identified on the Java side by its `InputEvent` mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// `BUTTON1_MASK`
    #[default]
    Left,
    /// `BUTTON2_MASK`
    Middle,
    /// `BUTTON3_MASK`
    Right,
}

impl MouseButton {
    /// Java `InputEvent` button mask
    #[must_use]
    pub const fn mask(self) -> i32 {
        match self {
            Self::Left => 16,
            Self::Middle => 8,
            Self::Right => 4,
        }
    }
}

/// Which button to click, and how many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseClick {
    /// Button used
    pub button: MouseButton,
    /// Click count
    pub times: u32,
}

impl Default for MouseClick {
    fn default() -> Self {
        Self::left_button()
    }
}

impl MouseClick {
    /// Single left click
    #[must_use]
    pub const fn left_button() -> Self {
        Self {
            button: MouseButton::Left,
            times: 1,
        }
    }

    /// Single right click
    #[must_use]
    pub const fn right_button() -> Self {
        Self {
            button: MouseButton::Right,
            times: 1,
        }
    }

    /// Set the click count
    #[must_use]
    pub const fn times(mut self, times: u32) -> Self {
        self.times = times;
        self
    }

    /// Button mask of the clicked button
    #[must_use]
    pub const fn button_mask(&self) -> i32 {
        self.button.mask()
    }
}
