use glam::Vec3;

/// Geometric description of what a pixel sees; used to decide whether
/// reservoirs of two pixels (or of the same pixel across frames) can be
/// reused.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub point: Vec3,
    pub normal: Vec3,
    pub depth: f32,
}

impl Surface {
    /// Returns whether both surfaces are similar enough for their samples to
    /// be shared.
    pub fn is_similar_to(
        &self,
        other: &Self,
        thresholds: SurfaceThresholds,
    ) -> bool {
        if self.point.distance(other.point) > thresholds.ws_radius {
            return false;
        }

        if self.normal.dot(other.normal) < 1.0 - thresholds.normal {
            return false;
        }

        if let Some(linear_depth) = thresholds.linear_depth {
            if (self.depth - other.depth).abs() > linear_depth {
                return false;
            }
        }

        true
    }
}

/// Tolerances for [`Surface::is_similar_to()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceThresholds {
    /// Maximum distance between points, in world-space units
    pub ws_radius: f32,

    /// Maximum difference between linear depths; `None` skips the check
    pub linear_depth: Option<f32>,

    /// Maximum `1 - dot(n1, n2)`
    pub normal: f32,
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    const THRESHOLDS: SurfaceThresholds = SurfaceThresholds {
        ws_radius: 1.0,
        linear_depth: Some(0.5),
        normal: 0.1,
    };

    fn surface() -> Surface {
        Surface {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            depth: 10.0,
        }
    }

    #[test]
    fn similar() {
        let other = Surface {
            point: vec3(0.5, 0.0, 0.0),
            depth: 10.25,
            ..surface()
        };

        assert!(surface().is_similar_to(&other, THRESHOLDS));
    }

    #[test]
    fn too_far() {
        let other = Surface {
            point: vec3(1.5, 0.0, 0.0),
            ..surface()
        };

        assert!(!surface().is_similar_to(&other, THRESHOLDS));
    }

    #[test]
    fn different_normal() {
        let other = Surface {
            normal: vec3(1.0, 1.0, 0.0).normalize(),
            ..surface()
        };

        assert!(!surface().is_similar_to(&other, THRESHOLDS));
    }

    #[test]
    fn different_depth() {
        let other = Surface {
            depth: 11.0,
            ..surface()
        };

        assert!(!surface().is_similar_to(&other, THRESHOLDS));

        assert!(surface().is_similar_to(
            &other,
            SurfaceThresholds {
                linear_depth: None,
                ..THRESHOLDS
            }
        ));
    }
}
