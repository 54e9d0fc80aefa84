//! Per-vertex normal estimation from triangle connectivity
//!
//! Every triangle adds its un-normalized face normal
//! `(v[j] - v[i]) × (v[k] - v[i])` to each of its three vertices. That
//! vector's length is twice the triangle's area, so larger faces pull the
//! shared vertex normal harder. Once all faces are summed each vertex
//! normal is scaled to unit length.
//!
//! Vertices whose summed normal is exactly zero (isolated vertices,
//! degenerate faces only, or contributions that cancel) are left as the
//! zero vector rather than divided into NaN.

use meshview_core::{Error, Point3f, Result, Triangle, TriangleMesh, Vector3f};

/// Estimate per-vertex normals into a caller-provided buffer
///
/// With `faces` set, each entry indexes three vertices of `verts`. Without
/// it (or with an empty slice) the vertices are read as an implicit
/// triangle list: `3k`, `3k + 1`, `3k + 2` form triangle `k`, and one or
/// two trailing vertices that do not complete a triangle are ignored.
///
/// `out` must have exactly `verts.len()` elements. Its previous contents
/// are discarded. Nothing is written unless the call succeeds.
///
/// # Errors
///
/// * [`Error::SizeMismatch`] if `out.len() != verts.len()`
/// * [`Error::IndexOutOfRange`] if a face references a vertex `>= verts.len()`
pub fn estimate_normals(
    verts: &[Point3f],
    faces: Option<&[Triangle]>,
    out: &mut [Vector3f],
) -> Result<()> {
    if out.len() != verts.len() {
        log::trace!("estimate_normals rejected output of {} for {} vertices", out.len(), verts.len());
        return Err(Error::SizeMismatch {
            expected: verts.len(),
            actual: out.len(),
        });
    }

    match faces.filter(|faces| !faces.is_empty()) {
        Some(faces) => {
            validate_faces(faces, verts.len())?;
            log::debug!(
                "estimating normals for {} vertices from {} indexed triangles",
                verts.len(),
                faces.len()
            );
            accumulate(verts, faces.iter().copied(), out);
        }
        None => {
            log::debug!(
                "estimating normals for {} vertices as {} implicit triangles",
                verts.len(),
                verts.len() / 3
            );
            let triangles = (0..verts.len() / 3).map(|k| [3 * k, 3 * k + 1, 3 * k + 2]);
            accumulate(verts, triangles, out);
        }
    }

    let degenerate = normalize_all(out);
    if degenerate > 0 {
        log::debug!("{} vertices have no defined normal, left as zero", degenerate);
    }
    Ok(())
}

/// Indexed estimation, see [`estimate_normals`]
pub fn estimate_normals_indexed(
    verts: &[Point3f],
    faces: &[Triangle],
    out: &mut [Vector3f],
) -> Result<()> {
    estimate_normals(verts, Some(faces), out)
}

/// Implicit triangle list estimation, see [`estimate_normals`]
pub fn estimate_normals_implicit(verts: &[Point3f], out: &mut [Vector3f]) -> Result<()> {
    estimate_normals(verts, None, out)
}

/// Allocating variant of [`estimate_normals`]
pub fn compute_normals(verts: &[Point3f], faces: Option<&[Triangle]>) -> Result<Vec<Vector3f>> {
    let mut normals = vec![Vector3f::zeros(); verts.len()];
    estimate_normals(verts, faces, &mut normals)?;
    Ok(normals)
}

/// Types that can (re)compute their own vertex normals
pub trait VertexNormals {
    /// Fill the vertex normal buffer from the current geometry
    fn compute_vertex_normals(&mut self) -> Result<()>;
}

impl VertexNormals for TriangleMesh {
    fn compute_vertex_normals(&mut self) -> Result<()> {
        let len = self.vertices.len();
        let reuse = matches!(&self.normals, Some(normals) if normals.len() == len);
        let mut normals = match self.normals.take() {
            Some(normals) if reuse => normals,
            old => {
                self.normals = old;
                vec![Vector3f::zeros(); len]
            }
        };

        let result = estimate_normals(&self.vertices, self.faces.as_deref(), &mut normals);
        // A failed estimate leaves the buffer untouched, so a reused one goes back as-is
        if result.is_ok() || reuse {
            self.normals = Some(normals);
        }
        result
    }
}

/// Face normal scaled by twice the triangle area
#[inline]
fn area_weighted_normal(a: &Point3f, b: &Point3f, c: &Point3f) -> Vector3f {
    (b - a).cross(&(c - a))
}

fn validate_faces(faces: &[Triangle], vertex_count: usize) -> Result<()> {
    for (face, triangle) in faces.iter().enumerate() {
        if let Some(&index) = triangle.iter().find(|&&index| index >= vertex_count) {
            log::trace!("face {} = {:?} out of range for {} vertices", face, triangle, vertex_count);
            return Err(Error::IndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Zero `out` and sum face normals into it; indices must already be in range
fn accumulate<I>(verts: &[Point3f], triangles: I, out: &mut [Vector3f])
where
    I: Iterator<Item = Triangle>,
{
    out.fill(Vector3f::zeros());
    for [i, j, k] in triangles {
        let n = area_weighted_normal(&verts[i], &verts[j], &verts[k]);
        out[i] += n;
        out[j] += n;
        out[k] += n;
    }
}

/// Scale every vector to unit length, returning how many had to stay zero
fn normalize_all(out: &mut [Vector3f]) -> usize {
    let mut degenerate = 0;
    for n in out.iter_mut() {
        // Rescale by the largest component first so tiny sums do not underflow when squared
        let largest = n.amax();
        if largest > 0.0 {
            let scaled = *n / largest;
            *n = scaled / scaled.norm();
        } else {
            *n = Vector3f::zeros();
            degenerate += 1;
        }
    }
    degenerate
}
