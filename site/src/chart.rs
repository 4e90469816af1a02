//! Chart geometry for the inline SVG charts.
//!
//! Pure layout math: value scales, category bands, bar rectangles, line
//! points and pie arcs. The Leptos components in
//! [`crate::components::charts`] only turn these marks into SVG elements.
//!
//! Coordinates are SVG user units with the origin at the top-left corner,
//! so larger values map to smaller `y`.

use std::f64::consts::{PI, TAU};

/// Number of value-axis ticks drawn by default.
pub const DEFAULT_TICKS: usize = 5;

/// Space between the chart edge and the plot area (axis labels live here).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 16.0,
            right: 16.0,
            bottom: 32.0,
            left: 44.0,
        }
    }
}

/// Outer chart size plus margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }
}

// =============================================================================
// Scales
// =============================================================================

/// A value domain aligned to a "nice" tick step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Domain {
    /// Builds a domain that contains `lo`, `hi` and zero, widened outwards
    /// to multiples of a step of 1, 2, 2.5, 5 or 10 times a power of ten.
    pub fn nice(lo: f64, hi: f64, ticks: usize) -> Self {
        let mut lo = lo.min(0.0);
        let mut hi = hi.max(0.0);
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }
        if (hi - lo).abs() < f64::EPSILON {
            hi = lo + 1.0;
        }

        let intervals = ticks.max(2) - 1;
        let step = nice_step((hi - lo) / intervals as f64);
        Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Maps values linearly from a [`Domain`] onto the vertical plot range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Domain,
    /// Pixel position of `domain.min`
    pub start: f64,
    /// Pixel position of `domain.max`
    pub end: f64,
}

impl LinearScale {
    /// Vertical scale over the frame's plot area.
    pub fn vertical(domain: Domain, frame: &Frame) -> Self {
        Self {
            domain,
            start: frame.plot_bottom(),
            end: frame.plot_top(),
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = (self.domain.max - self.domain.min).max(1e-9);
        let norm = (value - self.domain.min) / span;
        self.start + norm * (self.end - self.start)
    }

    /// Pixel position of the zero line (always inside the domain).
    pub fn baseline(&self) -> f64 {
        self.map(0.0)
    }
}

/// Evenly spaced category bands along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub start: f64,
    pub end: f64,
    /// Fraction of each band left empty, split evenly on both sides
    pub padding: f64,
}

impl BandScale {
    pub fn horizontal(count: usize, frame: &Frame) -> Self {
        Self {
            count,
            start: frame.plot_left(),
            end: frame.plot_right(),
            padding: 0.2,
        }
    }

    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.end - self.start) / self.count as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn band_start(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step() + self.step() * self.padding / 2.0
    }

    pub fn center(&self, index: usize) -> f64 {
        self.start + (index as f64 + 0.5) * self.step()
    }
}

// =============================================================================
// Categorical data
// =============================================================================

/// One named series of values, one value per category.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Categories on the x axis with one or more value series.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalData {
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl CategoricalData {
    /// Smallest and largest value across all series.
    pub fn value_range(&self) -> (f64, f64) {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Nice value domain for this data.
    pub fn domain(&self) -> Domain {
        let (lo, hi) = self.value_range();
        Domain::nice(lo, hi, DEFAULT_TICKS)
    }
}

// =============================================================================
// Marks
// =============================================================================

/// One bar of a (grouped) bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    pub category: usize,
    pub series: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarMark {
    /// SVG path for the bar, rounding the corners away from the baseline.
    pub fn path(&self, radius: f64) -> String {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let r = radius.min(w / 2.0).min(h).max(0.0);
        if self.value >= 0.0 {
            format!(
                "M{x0},{yb} L{x0},{yr} Q{x0},{y0} {xr},{y0} L{xl},{y0} Q{x1},{y0} {x1},{yr} L{x1},{yb} Z",
                x0 = num(x),
                x1 = num(x + w),
                xr = num(x + r),
                xl = num(x + w - r),
                y0 = num(y),
                yr = num(y + r),
                yb = num(y + h),
            )
        } else {
            format!(
                "M{x0},{y0} L{x0},{yr} Q{x0},{yb} {xr},{yb} L{xl},{yb} Q{x1},{yb} {x1},{yr} L{x1},{y0} Z",
                x0 = num(x),
                x1 = num(x + w),
                xr = num(x + r),
                xl = num(x + w - r),
                y0 = num(y),
                yr = num(y + h - r),
                yb = num(y + h),
            )
        }
    }
}

/// Lays out one bar per category per series; series share each band.
pub fn bar_layout(data: &CategoricalData, frame: &Frame, scale: &LinearScale) -> Vec<BarMark> {
    let bands = BandScale::horizontal(data.categories.len(), frame);
    let groups = data.series.len().max(1);
    let gap = 4.0;
    let bar_width = ((bands.bandwidth() - gap * (groups - 1) as f64) / groups as f64).max(1.0);
    let baseline = scale.baseline();

    let mut marks = Vec::with_capacity(data.categories.len() * groups);
    for category in 0..data.categories.len() {
        let left = bands.band_start(category);
        for (series, s) in data.series.iter().enumerate() {
            let Some(&value) = s.values.get(category) else {
                continue;
            };
            let top = scale.map(value);
            marks.push(BarMark {
                category,
                series,
                value,
                x: left + series as f64 * (bar_width + gap),
                y: top.min(baseline),
                width: bar_width,
                height: (baseline - top).abs(),
            });
        }
    }
    marks
}

/// A data point of a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    pub category: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Points for each series, placed at the category band centers.
pub fn line_layout(
    data: &CategoricalData,
    frame: &Frame,
    scale: &LinearScale,
) -> Vec<Vec<PointMark>> {
    let bands = BandScale::horizontal(data.categories.len(), frame);
    data.series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .take(data.categories.len())
                .enumerate()
                .map(|(category, &value)| PointMark {
                    category,
                    value,
                    x: bands.center(category),
                    y: scale.map(value),
                })
                .collect()
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline_points(points: &[PointMark]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One slice of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Position of the value in the input slice
    pub index: usize,
    pub fraction: f64,
    /// Radians, clockwise from 12 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    /// `text-anchor` for the outside label
    pub label_anchor: &'static str,
}

/// Splits a circle into slices proportional to `values`.
///
/// Zero, negative and non-finite values get no slice. An empty or all-zero
/// input yields no slices at all.
pub fn pie_layout(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = values
        .iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let label_radius = radius * 1.2;
    let mut angle = 0.0;
    let mut slices = Vec::new();
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let start = angle;
        let end = angle + fraction * TAU;
        angle = end;

        let mid = (start + end) / 2.0;
        let (lx, ly) = polar(cx, cy, label_radius, mid);
        slices.push(PieSlice {
            index,
            fraction,
            start_angle: start,
            end_angle: end,
            path: arc_path(cx, cy, radius, start, end),
            label_x: lx,
            label_y: ly,
            label_anchor: if mid.sin() >= 0.0 { "start" } else { "end" },
        });
    }
    slices
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    if end - start >= TAU - 1e-9 {
        // A single arc cannot start and end on the same point
        return format!(
            "M{cx},{top} A{r},{r} 0 1 1 {cx},{bottom} A{r},{r} 0 1 1 {cx},{top} Z",
            cx = num(cx),
            top = num(cy - r),
            bottom = num(cy + r),
            r = num(r),
        );
    }
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large = if end - start > PI { 1 } else { 0 };
    format!(
        "M{},{} L{},{} A{r},{r} 0 {large} 1 {},{} Z",
        num(cx),
        num(cy),
        num(x0),
        num(y0),
        num(x1),
        num(y1),
        r = num(r),
    )
}

/// Formats a number with at most two decimals and no trailing zeros.
///
/// Used for tick labels and SVG coordinates alike: `25`, `-7.5`, `0.23`.
pub fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_series() -> CategoricalData {
        CategoricalData {
            categories: vec!["Model-3", "Baseline"],
            series: vec![
                Series {
                    label: "mae",
                    color: "#0ea5e9",
                    values: vec![2.3, 5.8],
                },
                Series {
                    label: "rmse",
                    color: "#06b6d4",
                    values: vec![3.1, 7.2],
                },
            ],
        }
    }

    #[test]
    fn nice_domain_for_percentages() {
        let domain = Domain::nice(78.0, 96.0, DEFAULT_TICKS);
        assert_eq!(domain, Domain { min: 0.0, max: 100.0, step: 25.0 });
        assert_eq!(domain.ticks(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn nice_domain_for_negative_energies() {
        let domain = Domain::nice(-9.1, -5.1, DEFAULT_TICKS);
        assert_eq!(domain.min, -10.0);
        assert_eq!(domain.max, 0.0);
        assert_eq!(domain.ticks(), vec![-10.0, -7.5, -5.0, -2.5, 0.0]);
    }

    #[test]
    fn nice_domain_for_small_errors() {
        let domain = two_series().domain();
        assert_eq!(domain.ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let domain = Domain::nice(0.0, 0.0, DEFAULT_TICKS);
        assert!(domain.max > domain.min);

        let empty = CategoricalData {
            categories: vec![],
            series: vec![],
        };
        let domain = empty.domain();
        assert_eq!(domain.min, 0.0);
        assert!((domain.max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn linear_scale_maps_domain_to_plot_edges() {
        let frame = Frame::new(400.0, 300.0);
        let scale = LinearScale::vertical(Domain::nice(0.0, 96.0, DEFAULT_TICKS), &frame);
        assert_eq!(scale.map(0.0), frame.plot_bottom());
        assert_eq!(scale.map(100.0), frame.plot_top());
        assert_eq!(scale.baseline(), frame.plot_bottom());
    }

    #[test]
    fn band_scale_splits_plot_width() {
        let frame = Frame::new(400.0, 300.0);
        let bands = BandScale::horizontal(3, &frame);
        let step = frame.plot_width() / 3.0;
        assert_eq!(bands.step(), step);
        assert_eq!(bands.center(0), frame.plot_left() + step / 2.0);
        assert!(bands.band_start(1) > bands.center(0));
        assert_eq!(BandScale::horizontal(0, &frame).step(), 0.0);
    }

    #[test]
    fn bar_layout_one_mark_per_value() {
        let data = two_series();
        let frame = Frame::new(400.0, 300.0);
        let scale = LinearScale::vertical(data.domain(), &frame);
        let bars = bar_layout(&data, &frame, &scale);

        assert_eq!(bars.len(), 4);
        let groups: std::collections::BTreeSet<usize> = bars.iter().map(|b| b.category).collect();
        assert_eq!(groups.len(), 2);

        // rmse bar sits to the right of the mae bar in the same group
        assert!(bars[1].x > bars[0].x);
        assert!(bars[1].height > bars[0].height);
        for bar in &bars {
            assert!((bar.y + bar.height - scale.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_bars_hang_from_baseline() {
        let data = CategoricalData {
            categories: vec!["a"],
            series: vec![Series {
                label: "v",
                color: "#000",
                values: vec![-4.0],
            }],
        };
        let frame = Frame::new(200.0, 200.0);
        let scale = LinearScale::vertical(data.domain(), &frame);
        let bars = bar_layout(&data, &frame, &scale);
        assert_eq!(bars[0].y, scale.baseline());
        assert!(bars[0].height > 0.0);
    }

    #[test]
    fn bar_path_is_closed() {
        let bar = BarMark {
            category: 0,
            series: 0,
            value: 1.0,
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        let path = bar.path(8.0);
        assert!(path.starts_with("M10,60 L10,28 Q10,20 18,20"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn line_layout_points_per_series() {
        let data = two_series();
        let frame = Frame::new(400.0, 300.0);
        let scale = LinearScale::vertical(data.domain(), &frame);
        let lines = line_layout(&data, &frame, &scale);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|points| points.len() == 2));
        assert_eq!(lines[0][1].x, lines[1][1].x);

        let attr = polyline_points(&lines[0]);
        assert_eq!(attr.split(' ').count(), 2);
    }

    #[test]
    fn pie_slices_cover_the_circle() {
        let slices = pie_layout(&[65.0, 25.0, 10.0], 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[2].end_angle - TAU).abs() < 1e-9);
        assert!((slices[0].fraction - 0.65).abs() < 1e-9);
        // 65% spans more than half the circle
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
        assert_eq!(slices[0].label_anchor, "start");
        assert_eq!(slices[2].label_anchor, "end");
    }

    #[test]
    fn pie_skips_empty_values() {
        assert!(pie_layout(&[], 0.0, 0.0, 10.0).is_empty());
        assert!(pie_layout(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());

        let slices = pie_layout(&[0.0, 5.0, 5.0], 0.0, 0.0, 10.0);
        let indices: Vec<usize> = slices.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn full_pie_uses_two_arcs() {
        let slices = pie_layout(&[42.0], 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path, "M50,10 A40,40 0 1 1 50,90 A40,40 0 1 1 50,10 Z");
    }

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(25.0), "25");
        assert_eq!(num(-7.5), "-7.5");
        assert_eq!(num(0.23), "0.23");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(1.005), "1");
    }
}
