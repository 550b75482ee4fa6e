/// Terminal front end for the cam3d pipeline
///
/// Owns the single long-lived camera and the static scene, maps key
/// presses to camera commands, and re-renders after each command. The
/// loop is synchronous and event-driven: a command runs to completion,
/// then the frame is redrawn, then the next key is read.
use cam3d_core::camera::Axis;
use cam3d_core::{painter_pass, wireframe_pass, Camera, CameraCommand, Scene};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};

pub mod renderer;

pub use renderer::CellRenderer;

const MOVE_STEP: f32 = 5.0;
const ANGLE_STEP: f32 = std::f32::consts::PI / 36.0; // 5 degrees
const ZOOM_STEP: f32 = 100.0;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    renderer: CellRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            scene,
            camera: Camera::default(),
            renderer: CellRenderer::new(width as usize, height as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;
        while self.running {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                if code == KeyCode::Esc {
                    self.running = false;
                } else if let Some(command) = command_for(code) {
                    command.apply(&mut self.camera);
                    self.render()?;
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        for (a, b) in wireframe_pass(&self.scene, &self.camera) {
            self.renderer.segment(&a, &b);
        }
        for triangle in painter_pass(&self.scene, &self.camera) {
            self.renderer.triangle(&triangle);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "cam3d | pos ({:.0}, {:.0}, {:.0}) | focal {:.0} | WASD/QE=Move Arrows=Look R/F=Roll +/-=Zoom Esc=Quit",
                self.camera.position.x,
                self.camera.position.y,
                self.camera.position.z,
                self.camera.focal_length(),
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Map a key press to a camera command, if the key is bound.
pub fn command_for(code: KeyCode) -> Option<CameraCommand> {
    Some(match code {
        KeyCode::Char('w') => CameraCommand::MoveLocal(0.0, 0.0, MOVE_STEP),
        KeyCode::Char('s') => CameraCommand::MoveLocal(0.0, 0.0, -MOVE_STEP),
        KeyCode::Char('a') => CameraCommand::MoveLocal(-MOVE_STEP, 0.0, 0.0),
        KeyCode::Char('d') => CameraCommand::MoveLocal(MOVE_STEP, 0.0, 0.0),
        KeyCode::Char('q') => CameraCommand::MoveLocal(0.0, MOVE_STEP, 0.0),
        KeyCode::Char('e') => CameraCommand::MoveLocal(0.0, -MOVE_STEP, 0.0),
        KeyCode::Up => CameraCommand::RotateLocal(Axis::X, -ANGLE_STEP),
        KeyCode::Down => CameraCommand::RotateLocal(Axis::X, ANGLE_STEP),
        KeyCode::Left => CameraCommand::RotateLocal(Axis::Y, -ANGLE_STEP),
        KeyCode::Right => CameraCommand::RotateLocal(Axis::Y, ANGLE_STEP),
        KeyCode::Char('r') => CameraCommand::RotateLocal(Axis::Z, ANGLE_STEP),
        KeyCode::Char('f') => CameraCommand::RotateLocal(Axis::Z, -ANGLE_STEP),
        KeyCode::Char('+') | KeyCode::Char('=') => CameraCommand::AdjustZoom(ZOOM_STEP),
        KeyCode::Char('-') => CameraCommand::AdjustZoom(-ZOOM_STEP),
        _ => return None,
    })
}
