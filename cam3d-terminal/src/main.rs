/// cam3d Terminal Demo
///
/// Renders the wireframe street scene by default, or the flat-shaded
/// triangle scene with `--triangles`.
/// Controls:
///   - WASD / Q / E: Move in the camera's local frame
///   - Arrow Keys: Pitch and yaw
///   - R/F: Roll
///   - +/-: Zoom
///   - Esc: Quit

use cam3d_core::Scene;
use cam3d_terminal::TerminalApp;
use std::env;
use std::io;

fn main() -> io::Result<()> {
    let filled = env::args().any(|arg| arg == "--triangles");
    let scene = if filled {
        Scene::triangle_scene()
    } else {
        Scene::street_scene()
    };

    println!("cam3d terminal renderer - starting (press Esc to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    println!("Thank you for using the cam3d terminal renderer!");
    Ok(())
}
