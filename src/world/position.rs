use serde::{Deserialize, Serialize};

/// World-space coordinates with a facing angle, as the engine reports them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default)]
    pub o: f32,
}

impl Location {
    pub const fn new(x: f32, y: f32, z: f32, o: f32) -> Self {
        Self { x, y, z, o }
    }

    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, o: 0.0 }
    }

    /// Strict containment in the open rectangle `(min_x, max_x) x (min_y, max_y)`.
    pub fn inside_xy(self, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> bool {
        self.x > min_x && self.x < max_x && self.y > min_y && self.y < max_y
    }
}
