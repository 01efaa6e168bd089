//! Scene dump
//!
//! Loads the demo scene, applies the control values given on the command line
//! and prints the mesh a renderer would draw.
//!
//! ```text
//! RUST_LOG=debug cargo run --example scene_dump -- cube wave #00ff00
//! ```

use std::time::Instant;

use anyhow::Context;
use proc_shapes::gfx::scene::vertex::Vertex;
use proc_shapes::performance::PerformanceMonitor;
use proc_shapes::{ControlAction, Controls, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut controls = Controls::default();
    let mut args = std::env::args().skip(1);
    if let Some(shape) = args.next() {
        controls.apply(ControlAction::SetShape(shape.parse()?));
    }
    if let Some(shader) = args.next() {
        controls.apply(ControlAction::SetShader(shader.parse()?));
    }
    if let Some(color) = args.next() {
        controls.apply(ControlAction::SetColor(color));
    }

    let color = controls
        .color_rgba()
        .context("reading geometry color")?;

    let mut monitor = PerformanceMonitor::new();
    monitor.begin_frame();
    let start = Instant::now();
    let scene = Scene::load();
    let mesh = scene.active_mesh(&controls);
    monitor.update_render_stats(1, mesh.vertex_count() as u32);
    monitor.end_frame();

    println!(
        "shape: {}  shader: {}  color: {:?}",
        controls.shape, controls.shader, color
    );
    println!(
        "vertices: {}  triangles: {}  stride: {} bytes  index format: {:?}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        Vertex::desc().array_stride,
        proc_shapes::Mesh::INDEX_FORMAT
    );
    for (i, (p, n)) in mesh.positions.iter().zip(&mesh.normals).enumerate() {
        println!("  v{:<2} pos {:>5.2?}  nor {:>5.2?}", i, p, n);
    }
    for (i, tri) in mesh.indices.chunks(3).enumerate() {
        println!("  t{:<2} {:?}", i, tri);
    }

    log::info!(
        "Scene built in {:.3}ms ({} bytes of vertex data)",
        start.elapsed().as_secs_f64() * 1000.0,
        mesh.vertex_bytes().len()
    );
    Ok(())
}
