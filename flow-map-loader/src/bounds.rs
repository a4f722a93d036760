/// Flow map coordinate bounds tracking
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowMapBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for FlowMapBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowMapBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
            min_z: f32::INFINITY,
            max_z: f32::NEG_INFINITY,
        }
    }

    pub fn from_points(points: &[[f32; 3]]) -> Self {
        let mut bounds = Self::new();
        for point in points {
            bounds.update(*point);
        }
        bounds
    }

    /// Update bounds with a new point
    pub fn update(&mut self, [x, y, z]: [f32; 3]) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// Grow to enclose another set of bounds
    pub fn merge(&mut self, other: &FlowMapBounds) {
        if other.is_empty() {
            return;
        }
        self.update([other.min_x, other.min_y, other.min_z]);
        self.update([other.max_x, other.max_y, other.max_z]);
    }

    /// True until at least one point has been added
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y || self.min_z > self.max_z
    }

    pub fn center(&self) -> [f32; 3] {
        if self.is_empty() {
            return [0.0; 3];
        }
        [
            (self.max_x + self.min_x) * 0.5,
            (self.max_y + self.min_y) * 0.5,
            (self.max_z + self.min_z) * 0.5,
        ]
    }

    /// World space dimensions
    pub fn size(&self) -> [f32; 3] {
        if self.is_empty() {
            return [0.0; 3];
        }
        [
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bounds_are_empty() {
        let bounds = FlowMapBounds::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.center(), [0.0; 3]);
        assert_eq!(bounds.size(), [0.0; 3]);
    }

    #[test]
    fn tracks_extent_of_points() {
        let bounds = FlowMapBounds::from_points(&[[0.0, 0.0, 10.0], [2.0, 1.0, 10.0], [1.0, 0.5, 10.0]]);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.size(), [2.0, 1.0, 0.0]);
        assert_eq!(bounds.center(), [1.0, 0.5, 10.0]);
    }

    #[test]
    fn merge_ignores_empty_and_grows_otherwise() {
        let mut bounds = FlowMapBounds::from_points(&[[0.0, 0.0, 0.0]]);
        bounds.merge(&FlowMapBounds::new());
        assert_eq!(bounds.size(), [0.0; 3]);

        bounds.merge(&FlowMapBounds::from_points(&[[-1.0, 2.0, 3.0]]));
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.max_z, 3.0);
    }
}
