use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Computes the playable grid from the current viewport size.
    ///
    /// The play surface occupies at most 80% of the viewport on each axis,
    /// capped at [`MAX_SURFACE_UNITS`] surface units, and each grid cell is
    /// [`GRID_UNIT`] surface units. Recomputed whenever the viewport changes.
    #[must_use]
    pub fn from_viewport(columns: u16, rows: u16) -> Self {
        Self {
            width: grid_axis(columns),
            height: grid_axis(rows),
        }
    }

    /// Returns the fixed snake start cell, clamped inside these bounds.
    #[must_use]
    pub fn start_cell(self) -> (i32, i32) {
        (
            i32::from(START_CELL_X.min(self.width.saturating_sub(1))),
            i32::from(START_CELL_Y.min(self.height.saturating_sub(1))),
        )
    }
}

fn grid_axis(viewport_units: u16) -> u16 {
    let surface = u32::from(viewport_units) * u32::from(GRID_UNIT);
    let scaled = surface * VIEWPORT_FACTOR_PERCENT / 100;
    let capped = scaled.min(u32::from(MAX_SURFACE_UNITS));
    ((capped / u32::from(GRID_UNIT)) as u16).max(1)
}

/// Size of one grid cell in surface units.
pub const GRID_UNIT: u16 = 20;

/// Maximum play surface extent per axis, in surface units.
pub const MAX_SURFACE_UNITS: u16 = 400;

/// Share of the viewport the play surface may occupy, per axis.
pub const VIEWPORT_FACTOR_PERCENT: u32 = 80;

/// Fixed snake start cell.
pub const START_CELL_X: u16 = 9;
pub const START_CELL_Y: u16 = 10;

/// Food spawns uniformly over cells `0..FOOD_SPAWN_RANGE` on each axis,
/// independent of the surface size.
pub const FOOD_SPAWN_RANGE: u16 = 19;

/// Tick interval at the start of a session, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 100;

/// Interval decrease applied per food eaten, in milliseconds.
pub const TICK_INTERVAL_DECREMENT_MS: u64 = 5;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Main loop frame slice in milliseconds (input poll granularity).
pub const FRAME_SLICE_MS: u64 = 16;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Head cell color.
    pub snake_head: Color,
    /// Body segment color.
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_player: Color,
    pub hud_score: Color,
    pub hud_hint: Color,
    pub overlay_title: Color,
    pub overlay_body: Color,
}

/// Default palette: green head, white body, red food.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Green,
    snake_body: Color::White,
    food: Color::Red,
    border_fg: Color::Red,
    hud_player: Color::White,
    hud_score: Color::White,
    hud_hint: Color::DarkGray,
    overlay_title: Color::White,
    overlay_body: Color::Gray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Head glyphs carry the eye/mouth decoration, oriented by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "◓";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "◒";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◐";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "◑";

/// Head glyph before the first key press (no travel direction yet).
pub const GLYPH_SNAKE_HEAD_IDLE: &str = "●";

/// Food glyph.
pub const GLYPH_FOOD: &str = "❖";
