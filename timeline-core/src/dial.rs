//! Layout of the period selector dial.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Fixed measurements of the dial, in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DialGeometry {
    /// Width and height of the square the circle is drawn in.
    pub circle_size: f64,
    /// Distance from the center to each dot's center.
    pub radius: f64,
    /// Diameter of a dot control.
    pub dot_size: f64,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            circle_size: 520.0,
            radius: 220.0,
            dot_size: 40.0,
        }
    }
}

/// Top-left offset of a dot inside the dial square.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DotPosition {
    pub left: f64,
    pub top: f64,
}

/// A positioned dial control, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DialDot {
    pub index: usize,
    pub label: String,
    pub position: DotPosition,
    pub active: bool,
}

impl DialDot {
    /// 1-based number printed inside the dot.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl DialGeometry {
    pub fn center(&self) -> f64 {
        self.circle_size / 2.0
    }

    pub fn half_dot(&self) -> f64 {
        self.dot_size / 2.0
    }

    /// Angle of dot `index` out of `total`, starting at 12 o'clock and
    /// running clockwise in screen coordinates.
    pub fn angle(&self, index: usize, total: usize) -> Option<f64> {
        if total == 0 || index >= total {
            return None;
        }
        Some(2.0 * PI * index as f64 / total as f64 - FRAC_PI_2)
    }

    pub fn position(&self, index: usize, total: usize) -> Option<DotPosition> {
        let angle = self.angle(index, total)?;
        Some(DotPosition {
            left: self.center() + self.radius * angle.cos() - self.half_dot(),
            top: self.center() + self.radius * angle.sin() - self.half_dot(),
        })
    }

    /// Positions for every dot of an `total`-sized dial.
    pub fn positions(&self, total: usize) -> Vec<DotPosition> {
        (0..total)
            .filter_map(|index| self.position(index, total))
            .collect()
    }

    /// Center point of the dot placed at `position`.
    pub fn dot_center(&self, position: DotPosition) -> (f64, f64) {
        (position.left + self.half_dot(), position.top + self.half_dot())
    }
}
