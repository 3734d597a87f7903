use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::SamplingMode;
use crate::error::RenderError;
use crate::film::Film;
use crate::integrator::trace;
use crate::light::ShadingModel;
use crate::math::{Pixel, Vec3};
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub sampling: SamplingMode,
    #[serde(default)]
    pub shading: ShadingModel,
    /// Only accept hits in front of the observer. Off by default, which tests the whole line.
    #[serde(default)]
    pub cull_behind_observer: bool,
}

/// Rejects zero-sized rasters and rasters whose pixel count does not fit in `usize`.
pub fn check_dimensions(width: usize, height: usize) -> Result<usize, RenderError> {
    match width.checked_mul(height) {
        Some(pixels) if pixels > 0 => Ok(pixels),
        _ => Err(RenderError::InvalidDimensions { width, height }),
    }
}

/// Renders `scene` into a fresh `width x height` film.
///
/// Fails before any pixel work when the dimensions are zero or overflow, or when the scene
/// geometry is degenerate.
/// Pixels are independent and are filled in parallel on the current rayon pool; the result
/// is identical to a serial render.
pub fn render(
    scene: &Scene,
    width: usize,
    height: usize,
    settings: &RenderSettings,
) -> Result<Film<Pixel>, RenderError> {
    let pixels = check_dimensions(width, height)?;
    scene.validate()?;

    tracing::debug!(width, height, pixels, ?settings, "starting render");
    let now = Instant::now();

    let mut film = Film::new(width, height, Pixel::BACKGROUND);
    let camera = &scene.camera;
    film.buffer.par_iter_mut().enumerate().for_each(|(i, e)| {
        let x = i % width;
        let y = i / width;

        let mut ray = camera.get_ray(x, y, width, height, settings.sampling);
        if settings.cull_behind_observer {
            ray = ray.with_tmin(0.0);
        }
        *e = trace(ray, &scene.sphere, &scene.light, settings.shading);
    });

    tracing::debug!(
        elapsed_ms = now.elapsed().as_millis() as u64,
        pixels = film.total_pixels(),
        "render finished"
    );
    Ok(film)
}

/// One render per light source, in order. The scene is otherwise unchanged between passes.
/// Everything is validated up front, so either every pass is returned or none is.
pub fn render_batch(
    scene: &Scene,
    width: usize,
    height: usize,
    settings: &RenderSettings,
    sources: &[Vec3],
) -> Result<Vec<Film<Pixel>>, RenderError> {
    check_dimensions(width, height)?;
    scene.validate()?;

    sources
        .iter()
        .map(|source| render(&scene.with_light_source(*source), width, height, settings))
        .collect()
}
