use crate::map::MapDimensions;
use crate::params::ViewportSize;
use crate::position::Position;

/// Visible window into a level's map, in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    origin: Position,
    size: ViewportSize,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_size(ViewportSize::new(width, height))
    }

    pub fn with_size(size: ViewportSize) -> Self {
        Self {
            origin: Position::ORIGIN,
            size,
        }
    }

    /// Top-left tile of the window.
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        let (x, y) = (i64::from(position.x), i64::from(position.y));
        let (left, top) = (i64::from(self.origin.x), i64::from(self.origin.y));
        x >= left
            && y >= top
            && x < left + i64::from(self.size.width)
            && y < top + i64::from(self.size.height)
    }

    /// Centers the window on `position`, clamped so it stays inside `map`.
    pub fn center_on(&mut self, position: Position, map: MapDimensions) {
        let x = i64::from(position.x) - i64::from(self.size.width / 2);
        let y = i64::from(position.y) - i64::from(self.size.height / 2);
        self.origin = self.clamp_origin(x, y, map);
    }

    /// Scrolls the window, clamped so it stays inside `map`.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: MapDimensions) {
        let x = i64::from(self.origin.x) + i64::from(dx);
        let y = i64::from(self.origin.y) + i64::from(dy);
        self.origin = self.clamp_origin(x, y, map);
    }

    // Sizes are u32, so the arithmetic runs in i64. A window wider than the
    // map sticks to the left/top edge.
    fn clamp_origin(&self, x: i64, y: i64, map: MapDimensions) -> Position {
        let max_x = (i64::from(map.width) - i64::from(self.size.width)).max(0);
        let max_y = (i64::from(map.height) - i64::from(self.size.height)).max(0);
        Position::new(clamp_to_i32(x, max_x), clamp_to_i32(y, max_y))
    }
}

fn clamp_to_i32(value: i64, max: i64) -> i32 {
    let clamped = value.clamp(0, max.min(i64::from(i32::MAX)));
    i32::try_from(clamped).unwrap_or(i32::MAX)
}
