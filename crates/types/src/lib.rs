//! Shared types - plain data structures and default constants
//!
//! Everything here is pure data used by the engine, the input mapping and the
//! renderers alike. Nothing in this crate knows about the board or the rules.
//!
//! # Default Geometry
//!
//! The default board is configured in pixels and divided into square blocks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH_PX` | 300 | Board width in pixels (15 columns) |
//! | `DEFAULT_BOARD_HEIGHT_PX` | 500 | Board height in pixels (25 rows) |
//! | `DEFAULT_BLOCK_SIZE_PX` | 20 | Size of one cell in pixels |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_INTERVAL_MS` | 500 | Automatic down-move interval |
//! | `MIN_TICK_INTERVAL_MS` | 100 | Fastest allowed interval |
//! | `SPEED_STEP_MS` | 100 | Interval change per speed command |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Direction, GridCell};
//!
//! let color = Color::from_u24(0x12ab34);
//! assert_eq!(color.to_hex(), "#12AB34");
//!
//! assert_eq!(Direction::Left.offset(), (-1, 0));
//! assert_eq!(GridCell::new(3, 4) - GridCell::new(1, 1), GridCell::new(2, 3));
//! ```

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize, Serializer};

/// Default board width in pixels
pub const DEFAULT_BOARD_WIDTH_PX: u32 = 300;

/// Default board height in pixels
pub const DEFAULT_BOARD_HEIGHT_PX: u32 = 500;

/// Default size of one block in pixels
pub const DEFAULT_BLOCK_SIZE_PX: u32 = 20;

/// Default automatic down-move interval (500ms)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 500;

/// Lower bound for the tick interval (100ms)
pub const MIN_TICK_INTERVAL_MS: u32 = 100;

/// Interval change applied by one speed-up/speed-down command
pub const SPEED_STEP_MS: u32 = 100;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from the low 24 bits of `value` (0xRRGGBB).
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Scale every channel by `num / 256`. Used by renderers for shading.
    pub fn scaled(self, num: u16) -> Self {
        let f = |c: u8| ((u32::from(c) * u32::from(num)) >> 8).min(255) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Integer grid coordinate. `y` grows downward; negative values are legal
/// (above the top row, or left of the board for pointer positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for GridCell {
    type Output = GridCell;

    fn add(self, rhs: GridCell) -> GridCell {
        GridCell::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for GridCell {
    type Output = GridCell;

    fn sub(self, rhs: GridCell) -> GridCell {
        GridCell::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Movement directions accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Grid offset `(dx, dy)` of one step in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// How the active piece is currently being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    /// Driven by gravity and the keyboard
    Falling,
    /// Grabbed by the pointer
    Held,
    /// Merged into the board (reported once, then the piece is gone)
    Settled,
}

/// Which tetromino set the generator draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceSet {
    /// L, T, S, O, I
    #[default]
    Classic5,
    /// L, T, S, O, I, Z, J
    Standard7,
}

impl PieceSet {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic5" | "5" => Some(PieceSet::Classic5),
            "standard7" | "7" => Some(PieceSet::Standard7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceSet::Classic5 => "classic5",
            PieceSet::Standard7 => "standard7",
        }
    }
}

/// Engine commands produced by input collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    /// Pointer pressed at a grid cell
    Grab(GridCell),
    /// Pointer moved to a grid cell while pressed
    DragTo(GridCell),
    /// Pointer released
    Release,
    TogglePause,
    Restart,
    SpeedUp,
    SpeedDown,
}
