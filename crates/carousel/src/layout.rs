use serde::{Deserialize, Serialize};

pub const WINDOW_RADIUS: usize = 3; // neighbours drawn on each side
pub const VERTICAL_SPACING: f64 = 80.0; // row pitch along the arc
pub const ACTIVE_HORIZONTAL_OFFSET: f64 = 40.0; // active entry juts out
pub const NEIGHBOR_HORIZONTAL_STEP: f64 = 10.0; // per step away from active
pub const ACTIVE_SCALE: f64 = 1.1;
pub const INACTIVE_SCALE: f64 = 0.9;
pub const INACTIVE_OPACITY: f64 = 0.4;

/// Constants of the wheel projection. Every field falls back to its default
/// when missing from a config source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayout {
    pub window_radius: usize,
    pub vertical_spacing: f64,
    pub active_horizontal_offset: f64,
    pub neighbor_horizontal_step: f64,
    pub active_scale: f64,
    pub inactive_scale: f64,
    pub inactive_opacity: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            window_radius: WINDOW_RADIUS,
            vertical_spacing: VERTICAL_SPACING,
            active_horizontal_offset: ACTIVE_HORIZONTAL_OFFSET,
            neighbor_horizontal_step: NEIGHBOR_HORIZONTAL_STEP,
            active_scale: ACTIVE_SCALE,
            inactive_scale: INACTIVE_SCALE,
            inactive_opacity: INACTIVE_OPACITY,
        }
    }
}

/// Render-ready placement of one entity relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub index: usize,
    /// Signed distance from the active index; negative entries sit above.
    pub offset: i64,
    pub visible: bool,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Placement {
    pub fn is_active(&self) -> bool {
        self.offset == 0
    }
}

impl WheelLayout {
    pub fn with_window_radius(mut self, window_radius: usize) -> Self {
        self.window_radius = window_radius;
        self
    }

    /// Entries outside the window keep their formula position but are fully
    /// transparent, so a renderer may either skip them or fade them in.
    ///
    /// `active` is trusted as is. An index outside the list still yields a
    /// deterministic result, just one where no entry is active.
    pub fn project(&self, index: usize, active: usize) -> Placement {
        let distance = index.abs_diff(active);
        let magnitude = i64::try_from(distance).unwrap_or(i64::MAX);
        let offset = if index < active { -magnitude } else { magnitude };
        let visible = distance <= self.window_radius;
        let is_active = distance == 0;

        let translate_x = if is_active {
            self.active_horizontal_offset
        } else {
            distance as f64 * self.neighbor_horizontal_step
        };
        let scale = if is_active {
            self.active_scale
        } else {
            self.inactive_scale
        };
        let opacity = match (visible, is_active) {
            (false, _) => 0.0,
            (true, true) => 1.0,
            (true, false) => self.inactive_opacity,
        };

        Placement {
            index,
            offset,
            visible,
            translate_x,
            translate_y: offset as f64 * self.vertical_spacing,
            scale,
            opacity,
        }
    }

    pub fn project_all(&self, len: usize, active: usize) -> Vec<Placement> {
        (0..len).map(|i| self.project(i, active)).collect()
    }

    pub fn visible(&self, len: usize, active: usize) -> impl Iterator<Item = Placement> + '_ {
        // only the window around `active` can be visible
        let start = active.saturating_sub(self.window_radius);
        let end = active
            .saturating_add(self.window_radius)
            .saturating_add(1)
            .min(len);
        (start..end)
            .map(move |i| self.project(i, active))
            .filter(|p| p.visible)
    }
}
