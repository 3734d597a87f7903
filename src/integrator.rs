use crate::geometry::{Primitive, Sphere};
use crate::light::{Light, ShadingModel};
use crate::math::{Pixel, Ray};

/// Color seen along `ray`: the shaded hit on `sphere`, or `Pixel::BACKGROUND` on a miss.
pub fn trace(ray: Ray, sphere: &Sphere, light: &Light, shading: ShadingModel) -> Pixel {
    match sphere.intersect(ray) {
        Some(isect) => shading.shade(light, &isect),
        None => Pixel::BACKGROUND,
    }
}
