//! Test-harness scaffolding: turns a rectangular character map into a
//! padded cost buffer. This lives entirely under `tests/` - it is not part
//! of the crate's public surface. Map parsing is a test-fixture concern, not
//! core pathfinder behavior.
//!
//! Space is cost `0`, a digit `'0'..='9'` is that integer cost, and any
//! other printable character is impassable. A one-cell impassable border is
//! added around the parsed rows, so a 1x1 map becomes a 3x3 buffer.

pub fn parse_map(rows: &[&str]) -> (usize, usize, Vec<f32>) {
    let inner_height = rows.len();
    let inner_width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let width = inner_width + 2;
    let height = inner_height + 2;

    let mut cost = vec![f32::INFINITY; width * height];
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let value = match ch {
                ' ' => 0.0,
                '0'..='9' => ch.to_digit(10).unwrap() as f32,
                _ => f32::INFINITY,
            };
            cost[(y + 1) * width + (x + 1)] = value;
        }
    }

    (width, height, cost)
}
