use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{gpu, Error, Result};

/// Per-scene rendering configuration; read-only while frames are rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Number of candidates drawn for each reservoir
    pub ris_samples: u32,

    /// Number of reservoirs maintained for each pixel
    pub reservoirs_per_pixel: u32,

    pub temporal_reuse: bool,
    pub temporal_ws_radius_threshold: f32,
    pub temporal_linear_depth_threshold: f32,
    pub temporal_normal_threshold: f32,

    /// Upper bound for the history length, relative to the current
    /// reservoir's sample count
    pub temporal_max_history: u32,

    pub spatial_reuse: bool,
    pub spatial_ws_radius_threshold: f32,
    pub spatial_normal_threshold: f32,

    /// Number of neighbours visited by each pixel
    pub spatial_samples: u32,

    /// Radius (in pixels) of the area neighbours are picked from
    pub spatial_radius: f32,

    pub shading_light_exponent: f32,
    pub ambient_color: Vec3,
}

impl SceneSettings {
    pub fn validate(&self) -> Result<()> {
        if self.ris_samples == 0 {
            return Err(Error::ZeroRisSamples);
        }

        if self.reservoirs_per_pixel == 0 {
            return Err(Error::ZeroReservoirsPerPixel);
        }

        if self.spatial_samples as usize > gpu::MAX_SPATIAL_SAMPLES {
            return Err(Error::InvalidSettings(format!(
                "spatial_samples must be at most {} (got {})",
                gpu::MAX_SPATIAL_SAMPLES,
                self.spatial_samples,
            )));
        }

        let thresholds = [
            ("temporal_ws_radius_threshold", self.temporal_ws_radius_threshold),
            (
                "temporal_linear_depth_threshold",
                self.temporal_linear_depth_threshold,
            ),
            ("temporal_normal_threshold", self.temporal_normal_threshold),
            ("spatial_ws_radius_threshold", self.spatial_ws_radius_threshold),
            ("spatial_normal_threshold", self.spatial_normal_threshold),
            ("spatial_radius", self.spatial_radius),
            ("shading_light_exponent", self.shading_light_exponent),
        ];

        for (name, value) in thresholds {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidSettings(format!(
                    "{name} must be non-negative (got {value})"
                )));
            }
        }

        if self.spatial_radius > gpu::MAX_SPATIAL_RADIUS {
            return Err(Error::InvalidSettings(format!(
                "spatial_radius must be at most {} (got {})",
                gpu::MAX_SPATIAL_RADIUS,
                self.spatial_radius,
            )));
        }

        if !self.ambient_color.is_finite() {
            return Err(Error::InvalidSettings(
                "ambient_color must be finite".into(),
            ));
        }

        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "ris_samples={}, reservoirs_per_pixel={}, temporal_reuse={}, \
             spatial_reuse={}",
            self.ris_samples,
            self.reservoirs_per_pixel,
            self.temporal_reuse,
            self.spatial_reuse,
        )
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            ris_samples: 32,
            reservoirs_per_pixel: 4,
            temporal_reuse: true,
            temporal_ws_radius_threshold: 999999999.0,
            temporal_linear_depth_threshold: 0.4,
            temporal_normal_threshold: 0.1,
            temporal_max_history: 20,
            spatial_reuse: false,
            spatial_ws_radius_threshold: 999999999.0,
            spatial_normal_threshold: 0.12,
            spatial_samples: 4,
            spatial_radius: 16.0,
            shading_light_exponent: 1.0,
            ambient_color: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        SceneSettings::default().validate().unwrap();
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let actual: SceneSettings =
            serde_json::from_str(r#"{ "ris_samples": 8 }"#).unwrap();

        assert_eq!(
            SceneSettings {
                ris_samples: 8,
                ..Default::default()
            },
            actual
        );
    }

    #[test]
    fn zero_reservoirs() {
        let target = SceneSettings {
            reservoirs_per_pixel: 0,
            ..Default::default()
        };

        assert!(matches!(
            target.validate(),
            Err(Error::ZeroReservoirsPerPixel)
        ));
    }

    #[test]
    fn zero_ris_samples() {
        let target = SceneSettings {
            ris_samples: 0,
            ..Default::default()
        };

        assert!(matches!(target.validate(), Err(Error::ZeroRisSamples)));
    }

    #[test]
    fn negative_threshold() {
        let target = SceneSettings {
            temporal_normal_threshold: -1.0,
            ..Default::default()
        };

        assert!(matches!(target.validate(), Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn too_many_spatial_samples() {
        let target = SceneSettings {
            spatial_samples: 1000,
            ..Default::default()
        };

        assert!(matches!(target.validate(), Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn huge_spatial_radius() {
        for spatial_radius in [1.0e10, f32::INFINITY] {
            let target = SceneSettings {
                spatial_radius,
                ..Default::default()
            };

            assert!(matches!(
                target.validate(),
                Err(Error::InvalidSettings(_))
            ));
        }
    }
}
