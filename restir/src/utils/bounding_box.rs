use std::ops::AddAssign;

use glam::Vec3;

use crate::gpu;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) / 2.0
    }

    /// Radius of the sphere enclosing this box.
    pub fn radius(&self) -> f32 {
        self.extent().length() / 2.0
    }

    pub fn is_set(&self) -> bool {
        self.min.x != Self::default().min.x
    }

    /// Intersects given ray with this box, returning the distance to the
    /// closest point in front of the ray's origin together with the normal of
    /// the face it lays on.
    pub fn hit(&self, ray: &gpu::Ray) -> Option<(f32, Vec3)> {
        let t0 = (self.min - ray.origin()) * ray.inv_direction();
        let t1 = (self.max - ray.origin()) * ray.inv_direction();
        let t_min = t0.min(t1);
        let t_max = t0.max(t1);

        let near = t_min.max_element();
        let far = t_max.min_element();

        if near > far || far <= 0.0 {
            return None;
        }

        let (distance, t) = if near > 0.0 {
            (near, t_min)
        } else {
            (far, t_max)
        };

        let normal = if t.x == distance {
            Vec3::X
        } else if t.y == distance {
            Vec3::Y
        } else {
            Vec3::Z
        };

        let normal = if normal.dot(ray.direction()) > 0.0 {
            -normal
        } else {
            normal
        };

        Some((distance, normal))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        *self += rhs.min;
        *self += rhs.max;
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}
