//! Scene descriptions loaded from YAML.

mod loader;

use log::warn;
use serde::Deserialize;

use crate::color::Color;
use crate::light::Light;
use crate::matrix::Matrix;
use crate::scene::{Scene, Viewport};
use crate::sphere::Sphere;
use crate::vector::Vector;

pub use crate::sphere::NO_SPECULAR;
pub use loader::load_scene_config;

/// Top-level scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    /// Viewport width/height on the projection plane
    #[serde(default = "default_viewport_size")]
    pub viewport_size: f64,
    /// Distance from the camera to the projection plane
    #[serde(default = "default_projection_plane_z")]
    pub projection_plane_z: f64,
    /// Color of rays that hit nothing
    #[serde(default)]
    pub background: [u8; 3],
    /// Camera placement
    #[serde(default)]
    pub camera: CameraConfig,
    /// Spheres, in tracing order
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    /// Lights
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

fn default_viewport_size() -> f64 {
    Viewport::default().size
}

fn default_projection_plane_z() -> f64 {
    Viewport::default().projection_plane_z
}

/// Camera placement. `orientation` and `rotation_y` are mutually exclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CameraConfig {
    /// Eye position
    #[serde(default)]
    pub position: [f64; 3],
    /// Rows of the camera rotation matrix
    #[serde(default)]
    pub orientation: Option<[[f64; 3]; 3]>,
    /// Rotation about the vertical axis, in degrees
    #[serde(default)]
    pub rotation_y: Option<f64>,
}

/// One sphere.
#[derive(Debug, Clone, Deserialize)]
pub struct SphereConfig {
    /// Center position
    pub center: [f64; 3],
    /// Radius, must be positive
    pub radius: f64,
    /// Surface color
    pub color: [u8; 3],
    /// Phong exponent; absent or -1 disables the highlight
    #[serde(default)]
    pub specular: Option<f64>,
    /// Mirror reflectivity in `[0, 1]`
    #[serde(default)]
    pub reflective: f64,
}

/// One light, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum LightConfig {
    Ambient { intensity: f64 },
    Point { intensity: f64, position: [f64; 3] },
    Directional { intensity: f64, direction: [f64; 3] },
}

impl From<&LightConfig> for Light {
    fn from(config: &LightConfig) -> Self {
        match *config {
            LightConfig::Ambient { intensity } => Light::Ambient { intensity },
            LightConfig::Point { intensity, position } => Light::Point {
                intensity,
                position: position.into(),
            },
            LightConfig::Directional { intensity, direction } => Light::Directional {
                intensity,
                direction: direction.into(),
            },
        }
    }
}

impl SphereConfig {
    fn to_sphere(&self, index: usize) -> Sphere {
        let sphere = Sphere::new(self.center.into(), self.radius, Color::from(self.color))
            .with_reflective(self.reflective);
        match self.specular {
            Some(exponent) if exponent == NO_SPECULAR => {
                warn!("Sphere #{}: specular {} means no highlight; omit the key instead", index, NO_SPECULAR);
                sphere
            }
            Some(exponent) => sphere.with_specular(exponent),
            None => sphere,
        }
    }
}

impl CameraConfig {
    fn orientation(&self) -> Matrix {
        match (self.orientation, self.rotation_y) {
            (Some([r0, r1, r2]), _) => Matrix::from_rows(r0.into(), r1.into(), r2.into()),
            (None, Some(degrees)) => Matrix::rotation_y(degrees),
            (None, None) => Matrix::IDENTITY,
        }
    }
}

impl SceneConfig {
    /// Check the values the tracer cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "viewport_size must be positive, got {}",
                self.viewport_size
            )));
        }
        if !(self.projection_plane_z > 0.0) {
            return Err(ConfigError::Validation(format!(
                "projection_plane_z must be positive, got {}",
                self.projection_plane_z
            )));
        }
        if self.camera.orientation.is_some() && self.camera.rotation_y.is_some() {
            return Err(ConfigError::Validation(
                "camera.orientation and camera.rotation_y are mutually exclusive".to_string(),
            ));
        }
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "sphere #{}: radius must be positive, got {}",
                    i, sphere.radius
                )));
            }
            if !(0.0..=1.0).contains(&sphere.reflective) {
                return Err(ConfigError::Validation(format!(
                    "sphere #{}: reflective must be within [0, 1], got {}",
                    i, sphere.reflective
                )));
            }
        }
        Ok(())
    }

    /// Validate and build the scene.
    pub fn to_scene(&self) -> Result<Scene, ConfigError> {
        self.validate()?;

        Ok(Scene::builder()
            .viewport_size(self.viewport_size)
            .projection_plane_z(self.projection_plane_z)
            .background(Color::from(self.background))
            .camera_position(self.camera.position.into())
            .camera_orientation(self.camera.orientation())
            .spheres(self.spheres.iter().enumerate().map(|(i, s)| s.to_sphere(i)))
            .lights(self.lights.iter().map(Light::from))
            .build())
    }
}

/// The built-in scene rendered when no scene file is given: three colored
/// spheres on a large yellow ground sphere, seen by a camera turned 45
/// degrees.
pub fn demo_scene() -> Scene {
    Scene::builder()
        .viewport_size(1.0)
        .projection_plane_z(1.0)
        .background(Color::BLACK)
        .camera_position(Vector::new(3.0, 0.0, 1.0))
        .camera_orientation(Matrix::from_rows(
            Vector::new(0.7071, 0.0, -0.7071),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(0.7071, 0.0, 0.7071),
        ))
        .spheres([
            Sphere::new(Vector::new(0.0, -1.0, 3.0), 1.0, Color::new(255, 0, 0))
                .with_specular(500.0)
                .with_reflective(0.2),
            Sphere::new(Vector::new(2.0, 0.0, 4.0), 1.0, Color::new(0, 0, 255))
                .with_specular(500.0)
                .with_reflective(0.3),
            Sphere::new(Vector::new(-2.0, 0.0, 4.0), 1.0, Color::new(0, 255, 0))
                .with_specular(10.0)
                .with_reflective(0.4),
            Sphere::new(Vector::new(0.0, -5001.0, 0.0), 5000.0, Color::new(255, 255, 0))
                .with_specular(1000.0)
                .with_reflective(0.5),
        ])
        .lights([
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Vector::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vector::new(1.0, 4.0, 4.0),
            },
        ])
        .build()
}

/// Errors raised while loading a scene file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file does not exist
    #[error("Scene file not found: {0}")]
    NotFound(String),

    /// The file could not be read
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid scene description
    #[error("Failed to parse scene file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The description parsed but holds unusable values
    #[error("Scene validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_YAML: &str = include_str!("../../scenes/demo.yaml");

    fn parse(yaml: &str) -> SceneConfig {
        serde_yaml::from_str(yaml).expect("valid yaml")
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse("{}");
        let scene = config.to_scene().unwrap();
        assert_eq!(*scene.viewport(), Viewport::default());
        assert_eq!(scene.background(), Color::BLACK);
        assert_eq!(scene.camera().orientation, Matrix::IDENTITY);
        assert!(scene.spheres().is_empty());
    }

    #[test]
    fn test_demo_file_matches_builtin_demo() {
        let from_file = parse(DEMO_YAML).to_scene().unwrap();
        let builtin = demo_scene();
        assert_eq!(from_file.spheres(), builtin.spheres());
        assert_eq!(from_file.lights(), builtin.lights());
        assert_eq!(from_file.camera(), builtin.camera());
        assert_eq!(from_file.viewport(), builtin.viewport());
        assert_eq!(from_file.background(), builtin.background());
    }

    #[test]
    fn test_light_tags() {
        let config = parse(
            r#"
lights:
  - type: ambient
    intensity: 0.1
  - type: point
    intensity: 0.5
    position: [1, 2, 3]
  - type: directional
    intensity: 0.4
    direction: [0, 1, 0]
"#,
        );
        let scene = config.to_scene().unwrap();
        assert_eq!(
            scene.lights(),
            &[
                Light::Ambient { intensity: 0.1 },
                Light::Point { intensity: 0.5, position: Vector::new(1.0, 2.0, 3.0) },
                Light::Directional { intensity: 0.4, direction: Vector::new(0.0, 1.0, 0.0) },
            ]
        );
    }

    #[test]
    fn test_unknown_light_type_fails_to_parse() {
        let result: Result<SceneConfig, _> = serde_yaml::from_str("lights:\n  - type: spot\n    intensity: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_specular_sentinel_means_none() {
        let config = parse(
            r#"
spheres:
  - center: [0, 0, 3]
    radius: 1
    color: [255, 255, 255]
    specular: -1
  - center: [0, 0, 6]
    radius: 1
    color: [255, 255, 255]
    specular: 20
"#,
        );
        let scene = config.to_scene().unwrap();
        assert_eq!(scene.spheres()[0].specular(), None);
        assert_eq!(scene.spheres()[1].specular(), Some(20.0));
        assert_eq!(scene.spheres()[1].reflective(), 0.0);
    }

    #[test]
    fn test_rotation_y_camera() {
        let config = parse("camera:\n  position: [0, 1, 0]\n  rotation_y: 30\n");
        let scene = config.to_scene().unwrap();
        assert_eq!(scene.camera().orientation, Matrix::rotation_y(30.0));
        assert_eq!(scene.camera().position, Vector::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_conflicting_camera_rotation_is_rejected() {
        let config = parse(
            "camera:\n  rotation_y: 30\n  orientation: [[1, 0, 0], [0, 1, 0], [0, 0, 1]]\n",
        );
        assert!(matches!(config.to_scene(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_radius = parse("spheres:\n  - {center: [0, 0, 0], radius: 0, color: [1, 2, 3]}\n");
        assert!(matches!(bad_radius.validate(), Err(ConfigError::Validation(_))));

        let bad_reflective =
            parse("spheres:\n  - {center: [0, 0, 0], radius: 1, color: [1, 2, 3], reflective: 1.5}\n");
        assert!(matches!(bad_reflective.validate(), Err(ConfigError::Validation(_))));

        let bad_viewport = parse("viewport_size: 0\n");
        assert!(matches!(bad_viewport.validate(), Err(ConfigError::Validation(_))));

        let bad_plane = parse("projection_plane_z: -1\n");
        assert!(matches!(bad_plane.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_color_out_of_range_fails_to_parse() {
        let result: Result<SceneConfig, _> = serde_yaml::from_str("background: [0, 0, 256]\n");
        assert!(result.is_err());
    }
}
