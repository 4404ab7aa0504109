use std::path::Path;

use log::debug;

use super::{ConfigError, SceneConfig};

/// Load and validate a scene description from a YAML file
pub fn load_scene_config<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: SceneConfig = serde_yaml::from_str(&content)?;
    config.validate()?;

    debug!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        config.spheres.len(),
        config.lights.len()
    );

    Ok(config)
}
