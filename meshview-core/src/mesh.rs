//! Mesh buffer container

use crate::error::{Error, Result};
use crate::point::*;
use serde::{Deserialize, Serialize};

/// A triangle mesh owning its vertex, index and normal buffers
///
/// With `faces` set to `None` the vertices are read as an implicit
/// triangle list: vertices `3k`, `3k + 1` and `3k + 2` form triangle `k`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Option<Vec<Triangle>>,
    pub normals: Option<Vec<Vector3f>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh without an index buffer
    pub fn from_vertices(vertices: Vec<Point3f>) -> Self {
        Self {
            vertices,
            faces: None,
            normals: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<Triangle>) -> Self {
        Self {
            vertices,
            faces: Some(faces),
            normals: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles, counting implicit ones when there is no index buffer
    pub fn face_count(&self) -> usize {
        match &self.faces {
            Some(faces) => faces.len(),
            None => self.vertices.len() / 3,
        }
    }

    /// Check if the mesh has no triangles to draw
    pub fn is_empty(&self) -> bool {
        self.face_count() == 0
    }

    /// The index buffer, if the mesh is indexed
    pub fn faces(&self) -> Option<&[Triangle]> {
        self.faces.as_deref()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh, switching it to indexed mode
    pub fn add_face(&mut self, face: Triangle) {
        self.faces.get_or_insert_with(Vec::new).push(face);
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) -> Result<()> {
        if normals.len() != self.vertices.len() {
            return Err(Error::SizeMismatch {
                expected: self.vertices.len(),
                actual: normals.len(),
            });
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Interleave positions with normals; vertices without a normal get the zero vector
    pub fn to_normal_points(&self) -> Vec<NormalPoint3f> {
        let normals = self
            .normals
            .as_deref()
            .filter(|normals| normals.len() == self.vertices.len());

        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &position)| NormalPoint3f {
                position,
                normal: normals.map_or_else(Vector3f::zeros, |n| n[i]),
            })
            .collect()
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces = None;
        self.normals = None;
    }
}
