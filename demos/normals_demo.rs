//! Normal Estimation Demo
//!
//! Builds a cube in both topologies and prints the vertex normals each one
//! produces: smooth corner normals for the shared-vertex cube, flat face
//! normals for the triangle soup. Run with `RUST_LOG=debug` to see the
//! estimator's own summaries.

use anyhow::Context;
use meshview_core::{Point3f, Triangle, TriangleMesh, Vector3f};
use meshview_util::{estimate_normals, VertexNormals};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Normal Estimation Demo");
    println!("======================");

    let (verts, faces) = create_cube();
    println!("✓ Created cube with {} vertices and {} triangles", verts.len(), faces.len());

    // 1. Indexed, caller-owned buffer
    println!("\n1. Indexed triangles");
    println!("--------------------");
    let mut normals = vec![Vector3f::zeros(); verts.len()];
    let start = Instant::now();
    estimate_normals(&verts, Some(&faces[..]), &mut normals).context("indexed estimation failed")?;
    println!("✓ Estimated normals in {:?}", start.elapsed());
    print_normals(&verts, &normals);

    // 2. Implicit triangle list through the mesh container
    println!("\n2. Implicit triangle list");
    println!("-------------------------");
    let soup: Vec<Point3f> = faces.iter().flat_map(|f| f.map(|i| verts[i])).collect();
    let mut mesh = TriangleMesh::from_vertices(soup);
    let start = Instant::now();
    mesh.compute_vertex_normals().context("implicit estimation failed")?;
    println!("✓ Estimated normals in {:?}", start.elapsed());
    let soup_normals = mesh.normals.as_deref().unwrap_or_default();
    print_normals(&mesh.vertices[..6], &soup_normals[..6.min(soup_normals.len())]);
    println!("  ... {} more", mesh.vertex_count().saturating_sub(6));

    // 3. Contract violations are reported, not read out of bounds
    println!("\n3. Error handling");
    println!("-----------------");
    let bad_faces = [[0, 1, 42]];
    match estimate_normals(&verts, Some(&bad_faces[..]), &mut normals) {
        Ok(()) => println!("✗ out of range index was accepted"),
        Err(e) => println!("✓ {}", e),
    }
    let mut short = vec![Vector3f::zeros(); 2];
    match estimate_normals(&verts, None, &mut short) {
        Ok(()) => println!("✗ short output buffer was accepted"),
        Err(e) => println!("✓ {}", e),
    }

    Ok(())
}

fn print_normals(verts: &[Point3f], normals: &[Vector3f]) {
    for (i, (p, n)) in verts.iter().zip(normals).enumerate() {
        println!(
            "  [{:2}] ({:5.2}, {:5.2}, {:5.2}) -> ({:6.3}, {:6.3}, {:6.3})",
            i, p.x, p.y, p.z, n.x, n.y, n.z
        );
    }
}

/// Unit cube centred on the origin, outward counter-clockwise faces
fn create_cube() -> (Vec<Point3f>, Vec<Triangle>) {
    let verts = vec![
        Point3f::new(-0.5, -0.5, -0.5),
        Point3f::new(0.5, -0.5, -0.5),
        Point3f::new(0.5, 0.5, -0.5),
        Point3f::new(-0.5, 0.5, -0.5),
        Point3f::new(-0.5, -0.5, 0.5),
        Point3f::new(0.5, -0.5, 0.5),
        Point3f::new(0.5, 0.5, 0.5),
        Point3f::new(-0.5, 0.5, 0.5),
    ];
    let faces = vec![
        [0, 2, 1], [0, 3, 2], // -z
        [4, 5, 6], [4, 6, 7], // +z
        [0, 1, 5], [0, 5, 4], // -y
        [3, 6, 2], [3, 7, 6], // +y
        [0, 4, 7], [0, 7, 3], // -x
        [1, 2, 6], [1, 6, 5], // +x
    ];
    (verts, faces)
}
