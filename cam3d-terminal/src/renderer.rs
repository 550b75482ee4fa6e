/// Cell-buffer rasterizer for terminal rendering
///
/// Segments are stroked with Bresenham; triangles are filled by a
/// barycentric scan of their bounding box. There is deliberately no
/// depth buffer: cells are overwritten in call order, so feeding
/// triangles back to front is what realizes the painter's algorithm.
use cam3d_core::render::ProjectedTriangle;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;

const SEGMENT_CHAR: char = '#';
const FILL_CHAR: char = '█';

/// Segments whose cell-space walk would exceed this many steps are
/// dropped; near the camera plane a projection can land millions of
/// cells off screen and the line walk would never usefully terminate.
const MAX_LINE_STEPS: i64 = 10_000;

pub struct CellRenderer {
    width: usize,
    height: usize,
    cells: Vec<(char, Color)>,
}

impl CellRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Color::Reset); width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = (' ', Color::Reset);
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> (char, Color) {
        self.cells[y * self.width + x]
    }

    /// Map a projected point to cell coordinates: origin at the buffer
    /// center, y growing downward.
    fn to_cell(&self, p: &Point2<f32>) -> (i32, i32) {
        (
            (self.width as f32 * 0.5 + p.x).round() as i32,
            (self.height as f32 * 0.5 - p.y).round() as i32,
        )
    }

    fn plot(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = (ch, color);
    }

    /// Stroke a projected segment.
    pub fn segment(&mut self, a: &Point2<f32>, b: &Point2<f32>) {
        let (x0, y0) = self.to_cell(a);
        let (x1, y1) = self.to_cell(b);
        // Widen before subtracting: far off-screen cells can sit near the
        // i32 limits.
        let span = (x1 as i64 - x0 as i64)
            .abs()
            .max((y1 as i64 - y0 as i64).abs());
        if span > MAX_LINE_STEPS {
            return;
        }
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, SEGMENT_CHAR, Color::White);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a projected triangle with its color.
    pub fn triangle(&mut self, triangle: &ProjectedTriangle) {
        let color = Color::Rgb {
            r: triangle.color.r,
            g: triangle.color.g,
            b: triangle.color.b,
        };
        // Vertices in unrounded cell space.
        let verts: Vec<(f32, f32)> = triangle
            .vertices
            .iter()
            .map(|v| {
                (
                    self.width as f32 * 0.5 + v.x,
                    self.height as f32 * 0.5 - v.y,
                )
            })
            .collect();
        let (v0, v1, v2) = (verts[0], verts[1], verts[2]);

        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.plot(x, y, FILL_CHAR, color);
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let (ch, color) = self.cells[y * self.width + x];
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(ch))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Barycentric coordinates of `p` in the triangle, or `None` when the
/// triangle is degenerate in cell space.
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);
    if denom.abs() < 1e-6 {
        return None;
    }
    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;
    Some((w0, w1, w2))
}
