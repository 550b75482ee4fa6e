/// Example: Load and render a scene description file in the terminal
///
/// Usage: cargo run --example load_scene -- path/to/file.scene

use cam3d_core::{scenefile, Scene};
use cam3d_terminal::TerminalApp;
use std::env;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scene-file>", args[0]);
        eprintln!("\nNo scene file provided, using the built-in street scene...");
        let mut app = TerminalApp::new(Scene::street_scene())?;
        return app.run();
    }

    let scene_path = &args[1];

    println!("Loading scene file: {}", scene_path);

    let text = fs::read_to_string(scene_path)?;
    let scene = scenefile::parse_scene(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!(
        "Loaded {} segments, {} triangles",
        scene.segments.len(),
        scene.triangles.len()
    );
    println!("Starting terminal renderer (press Esc to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    Ok(())
}
