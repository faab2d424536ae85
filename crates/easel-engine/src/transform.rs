use crate::coords::Vec2;

/// Position, rotation and per-axis scale of an on-screen object.
///
/// Every constructor returns fresh values; fields stay public so callers
/// can move or rescale an object between draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: Vec2,
    pub local_scale: Vec2,
}

impl Transform {
    #[inline]
    pub const fn new(position: Vec2, rotation: Vec2, local_scale: Vec2) -> Self {
        Self { position, rotation, local_scale }
    }

    /// Identity transform with `local_scale = (s, s)`.
    #[inline]
    pub const fn from_uniform_scale(s: f32) -> Self {
        Self::from_scale(Vec2::splat(s))
    }

    /// Identity transform with the given per-axis scale.
    #[inline]
    pub const fn from_scale(local_scale: Vec2) -> Self {
        Self { position: Vec2::zero(), rotation: Vec2::zero(), local_scale }
    }

    /// Builder-style position override.
    #[inline]
    pub const fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_scale(Vec2::one())
    }
}

/// Scale argument accepted by texture/text constructors.
///
/// A bare `f32` means a uniform scale; a `Vec2` is used per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scale {
    Uniform(f32),
    PerAxis(Vec2),
}

impl Scale {
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        match self {
            Scale::Uniform(s) => Vec2::splat(s),
            Scale::PerAxis(v) => v,
        }
    }

    #[inline]
    pub const fn to_transform(self) -> Transform {
        Transform::from_scale(self.to_vec2())
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Uniform(1.0)
    }
}

impl From<f32> for Scale {
    fn from(s: f32) -> Self {
        Scale::Uniform(s)
    }
}

impl From<Vec2> for Scale {
    fn from(v: Vec2) -> Self {
        Scale::PerAxis(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_expands_to_both_axes() {
        for s in [0.0, 0.5, 1.0, 3.0, 50.0, -2.0] {
            assert_eq!(Transform::from_uniform_scale(s).local_scale, Vec2::new(s, s));
        }
    }

    #[test]
    fn vector_scale_is_kept_as_given() {
        for v in [Vec2::new(2.0, 0.5), Vec2::new(1.0, 1.0), Vec2::new(-1.0, 7.0)] {
            assert_eq!(Transform::from_scale(v).local_scale, v);
        }
    }

    #[test]
    fn default_is_identity_at_origin() {
        let t = Transform::default();
        assert_eq!(t.position, Vec2::zero());
        assert_eq!(t.rotation, Vec2::zero());
        assert_eq!(t.local_scale, Vec2::one());
    }

    #[test]
    fn defaults_are_not_shared() {
        let mut a = Transform::default();
        let b = Transform::default();
        a.position.x = 10.0;
        a.local_scale.y = 4.0;
        assert_eq!(b, Transform::default());
    }

    #[test]
    fn scale_conversions() {
        assert_eq!(Scale::from(2.0).to_vec2(), Vec2::new(2.0, 2.0));
        assert_eq!(Scale::from(Vec2::new(1.0, 3.0)).to_vec2(), Vec2::new(1.0, 3.0));
        assert_eq!(Scale::default().to_transform(), Transform::default());
    }
}
