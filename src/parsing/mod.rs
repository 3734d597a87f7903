mod primitives;

use std::{fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    error::RenderError,
    light::LightKind,
    math::Pixel,
    math::Vec3,
    renderer::{check_dimensions, RenderSettings},
    scene::Scene,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub camera: CameraData,
    pub light: LightData,
    pub sphere: SphereData,
}

impl From<SceneData> for Scene {
    fn from(data: SceneData) -> Self {
        Scene::new(data.camera.into(), data.light.into(), data.sphere.into())
    }
}

impl Default for SceneData {
    fn default() -> Self {
        SceneData {
            camera: CameraData {
                observer: [0.0, 0.0, 0.0],
                image_plane: [
                    [100.0, -100.0, 100.0],
                    [100.0, 100.0, 100.0],
                    [100.0, 100.0, -100.0],
                    [100.0, -100.0, -100.0],
                ],
            },
            light: LightData {
                kind: LightKind::Point,
                source: [1000.0, 0.0, 0.0],
                ambient: Pixel::new(100, 0, 0),
            },
            sphere: SphereData {
                center: [500.0, 0.0, 0.0],
                radius: 100.0,
            },
        }
    }
}

/// Everything needed for a run of the binary. Missing fields fall back to `RenderConfig::default()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// file stem, written under `output/`
    pub output: String,
    pub threads: Option<usize>,
    pub settings: RenderSettings,
    pub scene: SceneData,
    /// when present, one render per light source instead of a single render with `scene.light`
    pub light_sources: Option<Vec<[f64; 3]>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 400,
            height: 400,
            output: String::from("img"),
            threads: None,
            settings: RenderSettings::default(),
            scene: SceneData::default(),
            light_sources: None,
        }
    }
}

impl RenderConfig {
    pub fn scene(&self) -> Scene {
        self.scene.clone().into()
    }

    /// Light sources for each render pass, in order.
    pub fn light_sources(&self) -> Vec<Vec3> {
        match &self.light_sources {
            Some(sources) => sources.iter().map(|s| Vec3::from(*s)).collect(),
            None => vec![Vec3::from(self.scene.light.source)],
        }
    }

    pub fn is_batch(&self) -> bool {
        self.light_sources.is_some()
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        check_dimensions(self.width, self.height)?;
        if self.output.trim().is_empty() {
            return Err(RenderError::Config(String::from("output name is empty")));
        }
        if let Some(sources) = &self.light_sources {
            if sources.is_empty() {
                return Err(RenderError::Config(String::from(
                    "light_sources is present but empty",
                )));
            }
        }
        if self.threads == Some(0) {
            return Err(RenderError::Config(String::from("threads must be at least 1")));
        }
        self.scene().validate()
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, RenderError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path.as_ref()).and_then(|mut f| f.read_to_string(&mut input))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::camera::SamplingMode;
    use crate::light::ShadingModel;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        let scene = config.scene();
        assert_eq!(scene.sphere.center, Vec3::new(500.0, 0.0, 0.0));
        assert_eq!(scene.sphere.radius, 100.0);
        assert_eq!(scene.light.ambient, Pixel::new(100, 0, 0));
        assert_eq!(config.light_sources(), vec![Vec3::new(1000.0, 0.0, 0.0)]);
        assert!(!config.is_batch());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: RenderConfig = serde_json::from_str(
            r#"{
                "width": 32,
                "settings": { "shading": "lambertian", "sampling": "pixel_center" },
                "light_sources": [[0, 1000, 0], [0, -1000, 0]]
            }"#,
        )
        .unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 400);
        assert_eq!(config.settings.shading, ShadingModel::Lambertian);
        assert_eq!(config.settings.sampling, SamplingMode::PixelCenter);
        assert!(!config.settings.cull_behind_observer);
        assert_eq!(config.scene, SceneData::default());
        assert_eq!(
            config.light_sources(),
            vec![Vec3::new(0.0, 1000.0, 0.0), Vec3::new(0.0, -1000.0, 0.0)]
        );
    }

    #[test]
    fn test_full_scene() {
        let scene: SceneData = serde_json::from_str(
            r#"{
                "camera": {
                    "observer": [0, 0, 0],
                    "image_plane": [[-1, 1, 1], [1, 1, 1], [1, -1, 1], [-1, -1, 1]]
                },
                "light": { "kind": "directional", "source": [0, -1, 0], "ambient": [10, 20, 30, 40] },
                "sphere": { "center": [0, 0, 5], "radius": 2 }
            }"#,
        )
        .unwrap();
        let scene: Scene = scene.into();
        assert_eq!(scene.light.kind, LightKind::Directional);
        assert_eq!(scene.light.ambient, Pixel::with_alpha(10, 20, 30, 40));
        assert_eq!(scene.camera.image_plane.sup(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(scene.sphere.radius, 2.0);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = RenderConfig::default();
        config.height = 0;
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidDimensions { .. })
        ));

        let mut config = RenderConfig::default();
        config.light_sources = Some(vec![]);
        assert!(matches!(config.validate(), Err(RenderError::Config(_))));

        let mut config = RenderConfig::default();
        config.scene.camera.image_plane = [[100.0, 200.0, 200.0]; 4];
        assert!(matches!(config.validate(), Err(RenderError::Geometry(_))));
    }

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join(format!("sphere_caster_config_{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{ "width": 8, "height": 6, "output": "small" }}"#).unwrap();
        drop(file);

        let config: RenderConfig = load_json(&path).unwrap();
        assert_eq!((config.width, config.height), (8, 6));
        assert_eq!(config.output, "small");
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            load_json::<RenderConfig, _>(&path),
            Err(RenderError::Io(_))
        ));
    }

    #[test]
    fn test_load_json_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("sphere_caster_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ \"width\": \"wide\" }").unwrap();
        assert!(matches!(
            load_json::<RenderConfig, _>(&path),
            Err(RenderError::Config(_))
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
