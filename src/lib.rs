pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod light;
pub mod math;
pub mod output;
pub mod parsing;
pub mod renderer;
pub mod scene;

pub use camera::{Camera, SamplingMode};
pub use error::RenderError;
pub use film::Film;
pub use geometry::{Primitive, Quad, Sphere};
pub use light::{Light, LightKind, ShadingModel};
pub use math::{Pixel, Ray, Vec3};
pub use parsing::RenderConfig;
pub use renderer::{check_dimensions, render, render_batch, RenderSettings};
pub use scene::Scene;
