//! Loads a grid document, builds its cells and prints a summary.
//!
//! Usage: `cargo run --example load_grid -- [source] [options.json]`
//!
//! `source` is a path or URL (defaults to `demos/data/grid.json`).

use gridview::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/data/grid.json").to_string());
    let options = match args.next() {
        Some(path) => Options::from_json_file(path)?,
        None => Options::default(),
    };

    let loader = GridLoader::new();
    let mut scene = Scene::new();
    let count = load_into_scene(&loader, &source, &options, &mut scene).await?;

    let (min, max) = scene.bounding_box();
    println!("{count} cells from {source}");
    println!("bounds {min} .. {max}, length scale {:.3}", scene.length_scale());

    for structure in scene.iter_of_type("CellMesh") {
        if let Some(mesh) = structure.as_any().downcast_ref::<CellMesh>() {
            let wire = scene
                .get_as::<CellWireframe>(&format!("{}_wireframe", mesh.name()))
                .map_or(0, |w| w.edges().len());
            println!(
                "  {:<8} value {:>6.2}  color {:.3}  outline edges {wire}",
                mesh.name(),
                mesh.property_value(),
                mesh.color()
            );
        }
    }

    // Hide everything left of x = 1.5
    let plane = ClipPlane::new(Vec3::new(1.5, 0.0, 0.0), Vec3::X);
    let visible = scene.apply_clip(&plane);
    println!("{visible} of {} structures left after clipping", scene.len());

    Ok(())
}
