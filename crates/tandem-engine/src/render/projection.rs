//! Projection and model transforms for the demo quad.
//!
//! Clip space follows the classic fixed-function setup: an orthographic box that
//! is `[-1, 1]` vertically and stretched horizontally by the aspect ratio, so a
//! unit square stays square at any window shape.

use glam::Mat4;

use crate::coords::Viewport;

/// Symmetric orthographic extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ortho {
    pub half_width: f32,
    pub half_height: f32,
}

impl Ortho {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            half_width: viewport.aspect(),
            half_height: 1.0,
        }
    }

    /// Maps `[-hw, hw] × [-hh, hh] × [-1, 1]` to wgpu clip space.
    pub fn matrix(self) -> Mat4 {
        Mat4::orthographic_rh(
            -self.half_width,
            self.half_width,
            -self.half_height,
            self.half_height,
            -1.0,
            1.0,
        )
    }
}

/// Rotation about +Z accumulated from frame deltas.
///
/// Positive rates turn counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    degrees: f32,
    degrees_per_second: f32,
}

impl Spin {
    pub const DEFAULT_RATE: f32 = 10.0;

    pub const fn new(degrees_per_second: f32) -> Self {
        Self {
            degrees: 0.0,
            degrees_per_second,
        }
    }

    /// Advances by `dt` seconds. The angle is kept in `[0, 360)`.
    pub fn advance(&mut self, dt: f32) {
        self.degrees = (self.degrees + self.degrees_per_second * dt).rem_euclid(360.0);
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.degrees.to_radians())
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

/// Projection × model for the current frame.
pub fn quad_transform(viewport: Viewport, spin: &Spin) -> Mat4 {
    Ortho::for_viewport(viewport).matrix() * spin.matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn wide_viewport_extents() {
        let o = Ortho::for_viewport(Viewport::new(400, 200));
        assert_eq!(o.half_width, 2.0);
        assert_eq!(o.half_height, 1.0);
    }

    #[test]
    fn tall_viewport_narrows_horizontally() {
        let o = Ortho::for_viewport(Viewport::new(200, 400));
        assert_eq!(o.half_width, 0.5);
        assert_eq!(o.half_height, 1.0);
    }

    #[test]
    fn extents_map_to_clip_edges() {
        let m = Ortho::for_viewport(Viewport::new(400, 200)).matrix();
        let p = m.transform_point3(Vec3::new(2.0, 1.0, 0.0));
        assert!(approx(p.x, 1.0) && approx(p.y, 1.0));
        let p = m.transform_point3(Vec3::new(-2.0, -1.0, 0.0));
        assert!(approx(p.x, -1.0) && approx(p.y, -1.0));
    }

    #[test]
    fn depth_zero_stays_inside_clip_range() {
        let m = Ortho::for_viewport(Viewport::new(300, 300)).matrix();
        let z = m.transform_point3(Vec3::ZERO).z;
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn spin_advances_at_rate() {
        let mut s = Spin::default();
        s.advance(1.0);
        assert!(approx(s.degrees(), 10.0));
        s.advance(0.5);
        assert!(approx(s.degrees(), 15.0));
    }

    #[test]
    fn spin_wraps() {
        let mut s = Spin::new(90.0);
        s.advance(5.0);
        assert!(approx(s.degrees(), 90.0));
    }

    #[test]
    fn positive_spin_is_counter_clockwise() {
        let mut s = Spin::new(90.0);
        s.advance(1.0);
        let p = s.matrix().transform_point3(Vec3::X);
        assert!(approx(p.x, 0.0) && approx(p.y, 1.0));
    }

    #[test]
    fn quad_transform_keeps_square_corners_square() {
        let m = quad_transform(Viewport::new(400, 200), &Spin::default());
        let p = m.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        // 0.5 / aspect 2.0 horizontally, 0.5 vertically.
        assert!(approx(p.x, 0.25) && approx(p.y, 0.5));
    }
}
