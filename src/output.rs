use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::RenderError;
use crate::film::Film;
use crate::math::Pixel;

pub fn film_to_image(film: &Film<Pixel>) -> Result<RgbaImage, RenderError> {
    let invalid = || RenderError::InvalidDimensions {
        width: film.width,
        height: film.height,
    };
    let width = u32::try_from(film.width).map_err(|_| invalid())?;
    let height = u32::try_from(film.height).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        film.at(x as usize, y as usize).into()
    }))
}

pub fn write_png<P: AsRef<Path>>(film: &Film<Pixel>, path: P) -> Result<(), RenderError> {
    let img = film_to_image(film)?;
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

/// `<dir>/<stem>.png`, or `<dir>/<stem>_<pass>.png` for a pass of a batch.
pub fn output_path(dir: &Path, stem: &str, pass: Option<usize>) -> PathBuf {
    match pass {
        Some(pass) => dir.join(format!("{}_{}.png", stem, pass)),
        None => dir.join(format!("{}.png", stem)),
    }
}

/// Writes `film` to `output_path(dir, stem, pass)`, creating `dir` if needed.
pub fn output_film(
    dir: &Path,
    stem: &str,
    pass: Option<usize>,
    film: &Film<Pixel>,
) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, stem, pass);
    write_png(film, &path)?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(path)
}

/// Writes a whole batch, one file per film. `on_written` runs after each file lands.
///
/// If any write fails the files already written by this call are removed again, so a
/// failed batch leaves no partial output behind.
pub fn output_batch<F: FnMut(&Path)>(
    dir: &Path,
    stem: &str,
    batch: bool,
    films: &[Film<Pixel>],
    mut on_written: F,
) -> Result<Vec<PathBuf>, RenderError> {
    let mut written = Vec::with_capacity(films.len());
    for (pass, film) in films.iter().enumerate() {
        let pass = if batch { Some(pass) } else { None };
        match output_film(dir, stem, pass, film) {
            Ok(path) => {
                on_written(&path);
                written.push(path);
            }
            Err(e) => {
                for path in &written {
                    if let Err(remove_error) = std::fs::remove_file(path) {
                        tracing::warn!(path = %path.display(), %remove_error, "failed to remove partial output");
                    }
                }
                return Err(e);
            }
        }
    }
    Ok(written)
}
