//! # Bounding Boxes
//!
//! Axis-aligned bounds used to centre an assembled scene.

use glam::DVec3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its min and max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from a centre point and non-negative half extents.
    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Centre point.
    ///
    /// Stays finite whenever the box's size does, even for corners close to
    /// `f64::MAX`.
    pub fn center(&self) -> DVec3 {
        self.min + self.size() / 2.0
    }

    /// Returns true if both corners are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns true if the box is inverted along any axis.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Smallest box containing every box in the iterator, or `None` if empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blueprint_mesh::Aabb;
    /// use glam::DVec3;
    ///
    /// let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
    /// let b = Aabb::new(DVec3::splat(2.0), DVec3::splat(3.0));
    /// let all = Aabb::enclosing([a, b]).unwrap();
    /// assert_eq!(all.center(), DVec3::splat(1.5));
    /// assert!(Aabb::enclosing(Vec::<Aabb>::new()).is_none());
    /// ```
    pub fn enclosing(boxes: impl IntoIterator<Item = Aabb>) -> Option<Aabb> {
        boxes.into_iter().reduce(|acc, b| acc.union(&b))
    }
}
