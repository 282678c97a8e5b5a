//! Donut chart widget
//!
//! Draws proportional slices on a braille canvas. Angles run clockwise
//! from twelve o'clock. The geometry helpers are shared with mouse hit
//! testing so a hovered cell maps to the slice drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};
use std::f64::consts::TAU;

/// Hole radius relative to the outer radius
pub const INNER_RADIUS: f64 = 1.0 / 3.0;

/// Outer radius of slices that are not highlighted
pub const RESTING_RADIUS: f64 = 0.9;

/// Largest area with a round aspect, centered in `area`
///
/// Terminal cells are about twice as tall as wide, so a round chart is
/// twice as many columns as rows.
pub fn chart_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Radius and clockwise angle fraction (0..1) of a point in [-1, 1]²
pub fn polar(x: f64, y: f64) -> (f64, f64) {
    let radius = (x * x + y * y).sqrt();
    let fraction = (x.atan2(y) / TAU).rem_euclid(1.0);
    (radius, fraction)
}

/// Index of the slice covering an angle fraction
pub fn slice_at_fraction(values: &[u64], fraction: f64) -> Option<usize> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return None;
    }
    let target = fraction.clamp(0.0, 1.0) * total as f64;
    let mut cumulative = 0.0;
    let mut last_nonzero = None;
    for (index, value) in values.iter().enumerate() {
        if *value == 0 {
            continue;
        }
        cumulative += *value as f64;
        last_nonzero = Some(index);
        if target < cumulative {
            return Some(index);
        }
    }
    last_nonzero
}

/// Slice under a terminal cell, for a chart drawn into `area`
pub fn hit_test(area: Rect, column: u16, row: u16, values: &[u64]) -> Option<usize> {
    let chart = chart_area(area);
    if chart.width == 0
        || chart.height == 0
        || column < chart.x
        || row < chart.y
        || column >= chart.x + chart.width
        || row >= chart.y + chart.height
    {
        return None;
    }

    let x = (f64::from(column - chart.x) + 0.5) / f64::from(chart.width) * 2.0 - 1.0;
    let y = 1.0 - (f64::from(row - chart.y) + 0.5) / f64::from(chart.height) * 2.0;
    let (radius, fraction) = polar(x, y);

    // Cells are coarse; accept a little slack around the ring
    if radius < INNER_RADIUS * 0.75 || radius > 1.1 {
        return None;
    }
    slice_at_fraction(values, fraction)
}

/// A donut chart of non-negative values
#[derive(Debug, Clone)]
pub struct Donut {
    slices: Vec<(u64, Color)>,
    highlighted: Option<usize>,
}

impl Donut {
    pub fn new(slices: Vec<(u64, Color)>) -> Self {
        Self {
            slices,
            highlighted: None,
        }
    }

    /// Draw this slice at full radius
    pub fn highlight(mut self, index: Option<usize>) -> Self {
        self.highlighted = index;
        self
    }

    fn layers(&self, chart: Rect) -> Vec<(Color, Vec<(f64, f64)>)> {
        let values: Vec<u64> = self.slices.iter().map(|(v, _)| *v).collect();
        let mut layers: Vec<(Color, Vec<(f64, f64)>)> =
            self.slices.iter().map(|(_, c)| (*c, Vec::new())).collect();

        // One sample per braille dot
        let columns = u32::from(chart.width) * 2;
        let rows = u32::from(chart.height) * 4;
        for py in 0..rows {
            for px in 0..columns {
                let x = (f64::from(px) + 0.5) / f64::from(columns) * 2.0 - 1.0;
                let y = 1.0 - (f64::from(py) + 0.5) / f64::from(rows) * 2.0;
                let (radius, fraction) = polar(x, y);
                if !(INNER_RADIUS..=1.0).contains(&radius) {
                    continue;
                }
                if let Some(index) = slice_at_fraction(&values, fraction) {
                    let outer = if self.highlighted == Some(index) {
                        1.0
                    } else {
                        RESTING_RADIUS
                    };
                    if radius <= outer {
                        layers[index].1.push((x, y));
                    }
                }
            }
        }

        layers
    }
}

impl Widget for Donut {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chart = chart_area(area);
        if chart.width == 0 || chart.height == 0 {
            return;
        }

        let layers = self.layers(chart);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (color, coords) in &layers {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: *color,
                    });
                }
            })
            .render(chart, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_area_is_round() {
        let chart = chart_area(Rect::new(0, 0, 60, 10));
        assert_eq!(chart, Rect::new(20, 0, 20, 10));

        let tall = chart_area(Rect::new(0, 0, 20, 30));
        assert_eq!(tall, Rect::new(0, 10, 20, 10));
    }

    #[test]
    fn test_polar_angles_run_clockwise_from_top() {
        let (r, top) = polar(0.0, 1.0);
        assert!((r - 1.0).abs() < 1e-9);
        assert!(top.abs() < 1e-9);
        let (_, right) = polar(1.0, 0.0);
        assert!((right - 0.25).abs() < 1e-9);
        let (_, bottom) = polar(0.0, -1.0);
        assert!((bottom - 0.5).abs() < 1e-9);
        let (_, left) = polar(-1.0, 0.0);
        assert!((left - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_slice_at_fraction() {
        let values = [50, 0, 25, 25];
        assert_eq!(slice_at_fraction(&values, 0.0), Some(0));
        assert_eq!(slice_at_fraction(&values, 0.49), Some(0));
        assert_eq!(slice_at_fraction(&values, 0.5), Some(2));
        assert_eq!(slice_at_fraction(&values, 0.99), Some(3));
        assert_eq!(slice_at_fraction(&values, 1.0), Some(3));
        assert_eq!(slice_at_fraction(&[0, 0], 0.3), None);
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 0, 40, 20);
        let values = [1, 1, 1, 1];

        // Upper-right quadrant of the ring, then the hole in the middle
        assert_eq!(hit_test(area, 28, 4, &values), Some(0));
        assert_eq!(hit_test(area, 20, 10, &values), None);
        // Lower-left quadrant
        assert_eq!(hit_test(area, 11, 15, &values), Some(2));
        // Outside the chart
        assert_eq!(hit_test(area, 45, 4, &values), None);
    }

    #[test]
    fn test_layers_cover_every_nonzero_slice() {
        let donut = Donut::new(vec![(3, Color::Red), (0, Color::Blue), (1, Color::Green)]);
        let layers = donut.layers(Rect::new(0, 0, 20, 10));
        assert!(!layers[0].1.is_empty());
        assert!(layers[1].1.is_empty());
        assert!(!layers[2].1.is_empty());
        assert!(layers[0].1.len() > layers[2].1.len());
    }
}
