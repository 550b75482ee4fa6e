/// Line-oriented scene description parser
///
/// Format, one directive per line (`#` starts a comment):
///
/// ```text
/// cuboid   cx cy cz  width height depth
/// segment  x1 y1 z1  x2 y2 z2
/// triangle x1 y1 z1  x2 y2 z2  x3 y3 z3  r g b
/// ```
use nalgebra::Point3;
use nom::{
    bytes::complete::tag,
    character::complete::{multispace1, u8 as color_channel},
    number::complete::float,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use crate::scene::{Color, Scene};

#[derive(Debug, Error)]
pub enum SceneParseError {
    #[error("line {line}: unknown scene directive: {text:?}")]
    UnknownDirective { line: usize, text: String },
    #[error("line {line}: malformed {directive} directive: {text:?}")]
    Malformed {
        line: usize,
        directive: &'static str,
        text: String,
    },
}

/// Parse a scene description. Unknown directives and wrong arities are
/// errors, not silently skipped.
pub fn parse_scene(input: &str) -> Result<Scene, SceneParseError> {
    let mut scene = Scene::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        match text.split_whitespace().next().unwrap_or_default() {
            "cuboid" => {
                let (center, width, height, depth) =
                    run_parser(parse_cuboid, text, line, "cuboid")?;
                scene.add_cuboid(center, width, height, depth);
            }
            "segment" => {
                let (a, b) = run_parser(parse_segment, text, line, "segment")?;
                scene.add_segment(a, b);
            }
            "triangle" => {
                let (vertices, color) = run_parser(parse_triangle, text, line, "triangle")?;
                scene.add_triangle(vertices, color);
            }
            _ => {
                return Err(SceneParseError::UnknownDirective {
                    line,
                    text: text.to_string(),
                })
            }
        }
    }
    Ok(scene)
}

/// Run a directive parser over a full line, requiring it to consume
/// everything but trailing whitespace.
fn run_parser<T>(
    parser: fn(&str) -> IResult<&str, T>,
    text: &str,
    line: usize,
    directive: &'static str,
) -> Result<T, SceneParseError> {
    let malformed = || SceneParseError::Malformed {
        line,
        directive,
        text: text.to_string(),
    };
    let (rest, value) = parser(text).map_err(|_| malformed())?;
    if !rest.trim().is_empty() {
        return Err(malformed());
    }
    Ok(value)
}

fn parse_cuboid(input: &str) -> IResult<&str, (Point3<f32>, f32, f32, f32)> {
    let (input, _) = tag("cuboid")(input)?;
    let (input, center) = parse_point(input)?;
    let (input, width) = preceded(multispace1, float)(input)?;
    let (input, height) = preceded(multispace1, float)(input)?;
    let (input, depth) = preceded(multispace1, float)(input)?;
    Ok((input, (center, width, height, depth)))
}

fn parse_segment(input: &str) -> IResult<&str, (Point3<f32>, Point3<f32>)> {
    let (input, _) = tag("segment")(input)?;
    let (input, a) = parse_point(input)?;
    let (input, b) = parse_point(input)?;
    Ok((input, (a, b)))
}

fn parse_triangle(input: &str) -> IResult<&str, ([Point3<f32>; 3], Color)> {
    let (input, _) = tag("triangle")(input)?;
    let (input, v0) = parse_point(input)?;
    let (input, v1) = parse_point(input)?;
    let (input, v2) = parse_point(input)?;
    let (input, color) = parse_color(input)?;
    Ok((input, ([v0, v1, v2], color)))
}

fn parse_point(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn parse_color(input: &str) -> IResult<&str, Color> {
    let (input, r) = preceded(multispace1, color_channel)(input)?;
    let (input, g) = preceded(multispace1, color_channel)(input)?;
    let (input, b) = preceded(multispace1, color_channel)(input)?;
    Ok((input, Color::new(r, g, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# a street corner
cuboid 0 0 100 20 40 30

segment -5 -20 0 -5 -20 200
triangle -100 -100 300 100 -100 300 0 100 300 255 0 0
";

    #[test]
    fn parses_all_directives() {
        let scene = parse_scene(SAMPLE).unwrap();
        assert_eq!(scene.segments.len(), 13); // 12 cuboid edges + 1 segment
        assert_eq!(scene.triangles.len(), 1);
        assert_eq!(scene.triangles[0].color, Color::new(255, 0, 0));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let scene = parse_scene("# nothing here\n\n   \n").unwrap();
        assert!(scene.segments.is_empty());
        assert!(scene.triangles.is_empty());
    }

    #[test]
    fn unknown_directive_reports_line_number() {
        let err = parse_scene("segment 0 0 0 1 1 1\nsphere 0 0 0 5\n").unwrap_err();
        match err {
            SceneParseError::UnknownDirective { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let err = parse_scene("cuboid 0 0 100 20 40\n").unwrap_err();
        match err {
            SceneParseError::Malformed {
                line, directive, ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(directive, "cuboid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_garbage_is_malformed() {
        assert!(parse_scene("segment 0 0 0 1 1 1 extra\n").is_err());
    }

    #[test]
    fn negative_and_fractional_coordinates() {
        let scene = parse_scene("segment -1.5 2.25 -3e2 0 0 1\n").unwrap();
        assert_eq!(scene.segments[0].a, Point3::new(-1.5, 2.25, -300.0));
    }
}
