//! Camera Demo
//!
//! Aims a camera at a point, then projects a few world-space points through
//! the view and projection matrices to normalized device coordinates.

use meshview_core::{Point3f, Vector3f};
use meshview_util::{look_at, persp, Camera};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Camera Demo");
    println!("===========");

    let mut camera = Camera {
        position: Point3f::new(4.0, 3.0, 6.0),
        aspect: 4.0 / 3.0,
        ..Camera::default()
    };
    let target = Point3f::origin();
    camera.look_towards(&target)?;
    println!("✓ Camera at {:?} looking along {:?}", camera.position.coords, camera.forward);

    let view = camera.view_matrix()?;
    let proj = camera.projection_matrix()?;
    println!("\nView matrix:{}", view);
    println!("Projection matrix:{}", proj);

    let mvp = proj * view;
    for p in [target, Point3f::new(1.0, 0.0, 0.0), Point3f::new(0.0, 1.0, 0.0), Point3f::new(0.0, 0.0, 9.0)] {
        let clip = mvp * p.to_homogeneous();
        if clip.w <= 0.0 {
            println!("  ({:5.2}, {:5.2}, {:5.2}) is behind the camera", p.x, p.y, p.z);
            continue;
        }
        println!(
            "  ({:5.2}, {:5.2}, {:5.2}) -> ndc ({:6.3}, {:6.3}, {:6.3})",
            p.x, p.y, p.z, clip.x / clip.w, clip.y / clip.w, clip.z / clip.w
        );
    }

    println!("\nRejected inputs:");
    if let Err(e) = persp(1.0, 1.0, 10.0, 10.0) {
        println!("✓ persp: {}", e);
    }
    if let Err(e) = look_at(&camera.position, &Vector3f::y(), &Vector3f::y()) {
        println!("✓ look_at: {}", e);
    }

    Ok(())
}
