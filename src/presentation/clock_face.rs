// Analog clock face rendering
use crate::domain::clock::ClockAngles;
use crate::domain::color::ColorScheme;
use colored::Colorize;

pub const FACE_WIDTH: usize = 17;
pub const FACE_HEIGHT: usize = 9;

// Horizontal radius is doubled because a terminal cell is roughly twice as
// tall as it is wide.
const RADIUS_X: f64 = 8.0;
const RADIUS_Y: f64 = 4.0;
const CENTER_X: usize = 8;
const CENTER_Y: usize = 4;

// Hand lengths as a fraction of the rim radius. The second hand stops short
// of the rim so the hour markers stay visible.
const HOUR_HAND: f64 = 0.45;
const MINUTE_HAND: f64 = 0.7;
const SECOND_HAND: f64 = 0.85;
const HAND_SAMPLES: u32 = 8;

const MARKER: char = '·';
const HOUR_CHAR: char = '#';
const MINUTE_CHAR: char = '*';
const SECOND_CHAR: char = '.';
const CENTER_CHAR: char = 'o';

/// Plot markers and hands onto a bare character grid.
///
/// Pure function of the angles; the grid is rebuilt from scratch on every
/// call, so ticks are idempotent and nothing accumulates between renders.
/// Later strokes overwrite earlier ones: second, then minute, then hour,
/// then the center pivot.
pub fn plot_face(angles: &ClockAngles) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; FACE_WIDTH]; FACE_HEIGHT];

    for i in 0..12 {
        let (x, y) = cell_at((i as f64) * 30.0, 1.0);
        grid[y][x] = MARKER;
    }

    plot_hand(&mut grid, angles.seconds, SECOND_HAND, SECOND_CHAR);
    plot_hand(&mut grid, angles.minutes, MINUTE_HAND, MINUTE_CHAR);
    plot_hand(&mut grid, angles.hours, HOUR_HAND, HOUR_CHAR);
    grid[CENTER_Y][CENTER_X] = CENTER_CHAR;

    grid
}

/// Render the face as colored terminal lines, each `FACE_WIDTH` cells wide.
pub fn render_clock_face(angles: &ClockAngles, scheme: &ColorScheme) -> Vec<String> {
    let (pr, pg, pb) = hex_to_rgb(scheme.primary).unwrap_or((255, 255, 255));
    let (sr, sg, sb) = hex_to_rgb(scheme.secondary).unwrap_or((255, 255, 255));

    plot_face(angles)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    HOUR_CHAR | CENTER_CHAR => {
                        cell.to_string().truecolor(pr, pg, pb).to_string()
                    }
                    MINUTE_CHAR => cell.to_string().truecolor(sr, sg, sb).to_string(),
                    MARKER => cell.to_string().dimmed().to_string(),
                    _ => cell.to_string(),
                })
                .collect()
        })
        .collect()
}

fn plot_hand(grid: &mut [Vec<char>], angle_deg: f64, length: f64, ch: char) {
    for step in 1..=HAND_SAMPLES {
        let reach = length * (step as f64) / (HAND_SAMPLES as f64);
        let (x, y) = cell_at(angle_deg, reach);
        grid[y][x] = ch;
    }
}

/// Cell hit by a ray from the center at `angle_deg` (0 = 12 o'clock,
/// clockwise) and `reach` in fractions of the rim radius.
fn cell_at(angle_deg: f64, reach: f64) -> (usize, usize) {
    let rad = angle_deg.to_radians();
    let x = CENTER_X as f64 + RADIUS_X * reach * rad.sin();
    let y = CENTER_Y as f64 - RADIUS_Y * reach * rad.cos();
    (x.round() as usize, y.round() as usize)
}

/// Parse `#rrggbb` into components.
fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(hours: f64, minutes: f64, seconds: f64) -> Vec<Vec<char>> {
        plot_face(&ClockAngles {
            hours,
            minutes,
            seconds,
        })
    }

    #[test]
    fn test_twelve_markers_on_the_rim() {
        // Hands pointing up only touch the 12 o'clock column, so the other
        // eleven markers must all be present.
        let grid = face(0.0, 0.0, 0.0);
        let markers: usize = grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == MARKER)
            .count();
        assert!(markers >= 11);

        assert_eq!(grid[CENTER_Y][CENTER_X + 8], MARKER); // 3 o'clock
        assert_eq!(grid[CENTER_Y + 4][CENTER_X], MARKER); // 6 o'clock
        assert_eq!(grid[CENTER_Y][CENTER_X - 8], MARKER); // 9 o'clock
    }

    #[test]
    fn test_hands_at_midnight_point_up() {
        let grid = face(0.0, 0.0, 0.0);

        assert_eq!(grid[CENTER_Y][CENTER_X], CENTER_CHAR);
        // Hour hand nearest the pivot, minute hand reaching past it.
        assert_eq!(grid[CENTER_Y - 1][CENTER_X], HOUR_CHAR);
        assert_eq!(grid[CENTER_Y - 2][CENTER_X], HOUR_CHAR);
        assert_eq!(grid[CENTER_Y - 3][CENTER_X], MINUTE_CHAR);
    }

    #[test]
    fn test_second_hand_points_east_at_quarter_past() {
        let grid = face(0.0, 0.0, 90.0);

        assert_eq!(grid[CENTER_Y][CENTER_X + 3], SECOND_CHAR);
        assert_eq!(grid[CENTER_Y][CENTER_X + 6], SECOND_CHAR);
        // Rim marker survives behind the hand tip
        assert_eq!(grid[CENTER_Y][CENTER_X + 8], MARKER);
    }

    #[test]
    fn test_hour_hand_points_east_at_three() {
        let grid = face(90.0, 0.0, 0.0);
        assert_eq!(grid[CENTER_Y][CENTER_X + 2], HOUR_CHAR);
    }

    #[test]
    fn test_plot_is_deterministic() {
        assert_eq!(face(123.0, 45.0, 6.0), face(123.0, 45.0, 6.0));
    }

    #[test]
    fn test_rendered_rows_keep_face_width() {
        colored::control::set_override(false);
        let scheme = crate::domain::color::scheme_for("Tokyo");
        let rows = render_clock_face(
            &ClockAngles {
                hours: 315.0,
                minutes: 180.0,
                seconds: 42.0,
            },
            &scheme,
        );

        assert_eq!(rows.len(), FACE_HEIGHT);
        for row in rows {
            assert_eq!(row.chars().count(), FACE_WIDTH);
        }
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#6366f1"), Some((0x63, 0x66, 0xf1)));
        assert_eq!(hex_to_rgb("6366f1"), None);
        assert_eq!(hex_to_rgb("#xyzxyz"), None);
    }
}
