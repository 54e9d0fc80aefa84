//! Camera view matrices

use meshview_core::{Error, Matrix4f, Point3f, Result, Vector3f};

/// Smallest accepted length of `fw × up` before the basis is considered degenerate
const MIN_BASIS_NORM: f32 = 1e-6;

/// Build the world-to-camera matrix for a camera at `pos`
///
/// **`fw` is the normalized forward direction, not a point to look at.**
/// Callers holding a target point must pass `(target - pos).normalize()`.
/// `up` must be normalized too but need not be orthogonal to `fw`. Neither
/// vector is renormalized here; non-unit inputs produce a skewed transform.
///
/// The camera basis is `right = normalize(fw × up)`, `true_up = right × fw`,
/// with the camera looking down its local `-z`. The returned matrix applies
/// the transposed rotation `[right, true_up, -fw]` followed by the
/// translation `-pos` expressed in that basis.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `fw` and `up` are parallel, that is when
/// `|fw × up|` is at most `1e-6` or not finite.
pub fn look_at(pos: &Point3f, fw: &Vector3f, up: &Vector3f) -> Result<Matrix4f> {
    let side = fw.cross(up);
    let side_norm = side.norm();
    // NaN lengths fail the comparison as well
    if !(side_norm > MIN_BASIS_NORM && side_norm.is_finite()) {
        log::trace!("look_at rejected fw = {:?}, up = {:?}", fw, up);
        return Err(Error::invalid_argument(
            "forward and up directions must not be parallel",
        ));
    }

    let right = side / side_norm;
    let true_up = right.cross(fw);
    let eye = pos.coords;

    #[rustfmt::skip]
    let m = Matrix4f::new(
        right.x,   right.y,   right.z,   -right.dot(&eye),
        true_up.x, true_up.y, true_up.z, -true_up.dot(&eye),
        -fw.x,     -fw.y,     -fw.z,     fw.dot(&eye),
        0.0,       0.0,       0.0,       1.0,
    );
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vector3f {
        loop {
            let v = Vector3f::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.norm() > 0.1 {
                return v.normalize();
            }
        }
    }

    #[test]
    fn test_default_orientation_is_identity() {
        let m = look_at(&Point3f::origin(), &-Vector3f::z(), &Vector3f::y()).unwrap();
        assert_relative_eq!(m, Matrix4f::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_position_maps_to_origin_and_forward_to_minus_z() {
        let pos = Point3f::new(3.0, -2.0, 7.5);
        let fw = Vector3f::new(1.0, 2.0, -0.5).normalize();
        let up = Vector3f::y();
        let m = look_at(&pos, &fw, &up).unwrap();

        let origin = m.transform_point(&pos);
        assert_relative_eq!(origin, Point3f::origin(), epsilon = 1e-5);

        let ahead = m.transform_point(&(pos + fw));
        assert_relative_eq!(ahead, Point3f::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_forward_is_a_direction_not_a_target() {
        // Passing a target point as if it were a direction gives a different view
        let pos = Point3f::new(0.0, 0.0, 5.0);
        let target = Point3f::new(1.0, 0.0, 0.0);
        let fw = (target - pos).normalize();
        let up = Vector3f::y();

        let m = look_at(&pos, &fw, &up).unwrap();
        let conventional = Matrix4f::look_at_rh(&pos, &target, &up);
        assert_relative_eq!(m, conventional, epsilon = 1e-5);

        let misuse = look_at(&pos, &target.coords, &up).unwrap();
        assert!((misuse - conventional).norm() > 0.1);
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut checked = 0;
        while checked < 200 {
            let fw = random_unit(&mut rng);
            let up = random_unit(&mut rng);
            if fw.cross(&up).norm() < 0.05 {
                continue;
            }
            let pos = Point3f::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );

            let m = look_at(&pos, &fw, &up).unwrap();
            let r: Matrix3<f32> = m.fixed_view::<3, 3>(0, 0).into_owned();
            assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-5);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-5);
            assert_eq!(m.row(3).clone_owned(), nalgebra::RowVector4::new(0.0, 0.0, 0.0, 1.0));
            checked += 1;
        }
    }

    #[test]
    fn test_true_up_leans_towards_hint() {
        let fw = Vector3f::new(0.0, -0.6, -0.8);
        let up = Vector3f::y();
        let m = look_at(&Point3f::origin(), &fw, &up).unwrap();
        let true_up = Vector3f::new(m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        assert!(true_up.dot(&up) > 0.0);
        assert_relative_eq!(true_up.dot(&fw), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_non_unit_forward_is_not_renormalized() {
        let pos = Point3f::new(1.0, 2.0, 3.0);
        let fw = Vector3f::new(0.0, 0.0, -2.0);
        let m = look_at(&pos, &fw, &Vector3f::y()).unwrap();

        let back = Vector3f::new(m[(2, 0)], m[(2, 1)], m[(2, 2)]);
        assert_eq!(back, -fw);
        assert_relative_eq!(back.norm(), 2.0);
        assert_relative_eq!(m[(2, 3)], fw.dot(&pos.coords));
    }

    #[test]
    fn test_parallel_vectors_rejected() {
        let up = Vector3f::y();
        for fw in [Vector3f::y(), -Vector3f::y()] {
            let err = look_at(&Point3f::origin(), &fw, &up).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }

        let nan = Vector3f::new(f32::NAN, 0.0, 0.0);
        assert!(look_at(&Point3f::origin(), &nan, &up).is_err());
    }
}
