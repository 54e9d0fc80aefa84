//! Perspective projection matrices
//!
//! Matrices follow the OpenGL clip-space convention: the camera looks down
//! `-z`, and after the perspective divide depth `z_near` lands on `-1` and
//! `z_far` on `+1`.

use meshview_core::{Error, Matrix4f, Result};

/// Build a perspective projection matrix
///
/// `xscale` and `yscale` scale camera-space x and y before the divide by
/// `-z` (for a vertical field of view `fovy` these are
/// `1 / tan(fovy / 2) / aspect` and `1 / tan(fovy / 2)`, see [`fov_scales`]).
/// `z_near` and `z_far` are the positive clip distances.
///
/// Fails with [`Error::InvalidArgument`] unless both scales are positive and
/// finite and `0 < z_near < z_far` with both distances finite.
pub fn persp(xscale: f32, yscale: f32, z_near: f32, z_far: f32) -> Result<Matrix4f> {
    check_positive("xscale", xscale)?;
    check_positive("yscale", yscale)?;
    check_positive("z_near", z_near)?;
    check_positive("z_far", z_far)?;
    if z_near >= z_far {
        log::trace!("persp rejected clip range [{}, {}]", z_near, z_far);
        return Err(Error::invalid_argument(format!(
            "z_near ({}) must be less than z_far ({})",
            z_near, z_far
        )));
    }

    let depth = z_far - z_near;
    #[rustfmt::skip]
    let m = Matrix4f::new(
        xscale, 0.0,    0.0,                        0.0,
        0.0,    yscale, 0.0,                        0.0,
        0.0,    0.0,    -(z_far + z_near) / depth,  -2.0 * z_far * z_near / depth,
        0.0,    0.0,    -1.0,                       0.0,
    );
    Ok(m)
}

/// Axis scale factors for a vertical field of view (radians) and aspect ratio (width / height)
pub fn fov_scales(fovy: f32, aspect: f32) -> Result<(f32, f32)> {
    if !(fovy > 0.0 && fovy < std::f32::consts::PI) {
        return Err(Error::invalid_argument(format!(
            "fovy ({}) must lie strictly between 0 and pi",
            fovy
        )));
    }
    check_positive("aspect", aspect)?;

    let yscale = 1.0 / (fovy * 0.5).tan();
    Ok((yscale / aspect, yscale))
}

/// Perspective projection from a vertical field of view, see [`persp`]
pub fn persp_fov(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Result<Matrix4f> {
    let (xscale, yscale) = fov_scales(fovy, aspect)?;
    persp(xscale, yscale, z_near, z_far)
}

fn check_positive(name: &str, value: f32) -> Result<()> {
    // NaN fails the comparison as well
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        log::trace!("rejected {} = {}", name, value);
        Err(Error::invalid_argument(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
