//! SVG chart components.
//!
//! Layout comes from [`crate::chart`]; these components only emit markup.
//! Every bar, dot and slice carries an SVG `<title>` so browsers show a
//! tooltip on hover.

use leptos::prelude::*;

use crate::chart::{
    CategoricalData, Frame, LinearScale, Series, bar_layout, line_layout, num, pie_layout,
    polyline_points,
};
use crate::types::PhaseShare;

const AXIS_LABEL_GAP: f64 = 8.0;

/// Bar chart, grouped when `data` has more than one series.
#[component]
pub fn BarChart(
    data: CategoricalData,
    #[prop(default = 400.0)] width: f64,
    #[prop(default = 300.0)] height: f64,
    /// Corner radius of the bar ends away from the baseline
    #[prop(default = 8.0)]
    radius: f64,
) -> impl IntoView {
    let frame = Frame::new(width, height);
    let scale = LinearScale::vertical(data.domain(), &frame);
    let bars = bar_layout(&data, &frame, &scale);
    let grouped = data.series.len() > 1;

    let groups = data
        .categories
        .iter()
        .enumerate()
        .map(|(category, &name)| {
            let marks = bars
                .iter()
                .filter(|bar| bar.category == category)
                .map(|bar| {
                    let series = &data.series[bar.series];
                    let tip = if grouped {
                        format!("{} {}: {}", name, series.label, num(bar.value))
                    } else {
                        format!("{}: {}", name, num(bar.value))
                    };
                    view! {
                        <path class="chart-bar" d=bar.path(radius) fill=series.color>
                            <title>{tip}</title>
                        </path>
                    }
                })
                .collect_view();
            view! { <g class="bar-group">{marks}</g> }
        })
        .collect_view();

    view! {
        <figure class="chart-figure">
            <svg class="chart bar-chart" viewBox=view_box(&frame) role="img">
                <ValueAxis scale=scale frame=frame />
                <CategoryAxis categories=data.categories.clone() frame=frame />
                {groups}
            </svg>
            {grouped.then(|| view! { <Legend series=data.series.clone() /> })}
        </figure>
    }
}

/// Multi-series line chart with a dot per data point.
#[component]
pub fn LineChart(
    data: CategoricalData,
    #[prop(default = 400.0)] width: f64,
    #[prop(default = 300.0)] height: f64,
) -> impl IntoView {
    let frame = Frame::new(width, height);
    let scale = LinearScale::vertical(data.domain(), &frame);
    let lines = line_layout(&data, &frame, &scale);

    let series_views = data
        .series
        .iter()
        .zip(&lines)
        .map(|(series, points)| {
            let dots = points
                .iter()
                .map(|p| {
                    let tip = format!(
                        "{} {}: {}",
                        data.categories[p.category],
                        series.label,
                        num(p.value)
                    );
                    view! {
                        <circle class="chart-dot" cx=num(p.x) cy=num(p.y) r="4" fill=series.color>
                            <title>{tip}</title>
                        </circle>
                    }
                })
                .collect_view();
            view! {
                <g class="line-series">
                    <polyline class="chart-line" points=polyline_points(points) stroke=series.color />
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart-figure">
            <svg class="chart line-chart" viewBox=view_box(&frame) role="img">
                <ValueAxis scale=scale frame=frame />
                <CategoryAxis categories=data.categories.clone() frame=frame />
                {series_views}
            </svg>
            <Legend series=data.series.clone() />
        </figure>
    }
}

/// Pie chart with one colored segment and outside label per share.
#[component]
pub fn PieChart(
    shares: &'static [PhaseShare],
    #[prop(default = 400.0)] width: f64,
    #[prop(default = 300.0)] height: f64,
    #[prop(default = 80.0)] outer_radius: f64,
) -> impl IntoView {
    let frame = Frame::new(width, height);
    let values: Vec<f64> = shares.iter().map(|s| s.value).collect();
    let slices = pie_layout(&values, width / 2.0, height / 2.0, outer_radius);

    let segments = slices
        .into_iter()
        .map(|slice| {
            let share = shares[slice.index];
            let tip = format!("{}: {}%", share.name, num(share.value));
            let label = format!("{} {}%", share.name, num(share.value));
            view! {
                <path class="pie-slice" d=slice.path fill=share.color stroke="#ffffff">
                    <title>{tip}</title>
                </path>
                <text
                    class="pie-label"
                    x=num(slice.label_x)
                    y=num(slice.label_y)
                    text-anchor=slice.label_anchor
                    dominant-baseline="middle"
                    fill=share.color
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="chart-figure">
            <svg class="chart pie-chart" viewBox=view_box(&frame) role="img">
                {segments}
            </svg>
        </figure>
    }
}

/// Horizontal grid lines with value labels on the left.
#[component]
fn ValueAxis(scale: LinearScale, frame: Frame) -> impl IntoView {
    let ticks = scale.domain.ticks();
    let left = num(frame.plot_left());
    let right = num(frame.plot_right());

    let grid = ticks
        .iter()
        .map(|&tick| {
            let y = num(scale.map(tick));
            view! { <line x1=left.clone() x2=right.clone() y1=y.clone() y2=y /> }
        })
        .collect_view();
    let labels = ticks
        .iter()
        .map(|&tick| {
            view! {
                <text
                    x=num(frame.plot_left() - AXIS_LABEL_GAP)
                    y=num(scale.map(tick))
                    text-anchor="end"
                    dominant-baseline="middle"
                >
                    {num(tick)}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart-grid">{grid}</g>
        <g class="chart-axis value-axis">
            <line
                x1=left.clone()
                x2=left
                y1=num(frame.plot_top())
                y2=num(frame.plot_bottom())
            />
            {labels}
        </g>
    }
}

/// Category labels under the plot area.
#[component]
fn CategoryAxis(categories: Vec<&'static str>, frame: Frame) -> impl IntoView {
    let bands = crate::chart::BandScale::horizontal(categories.len(), &frame);
    let bottom = num(frame.plot_bottom());
    let labels = categories
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            view! {
                <text
                    x=num(bands.center(i))
                    y=num(frame.plot_bottom() + AXIS_LABEL_GAP + 12.0)
                    text-anchor="middle"
                >
                    {name}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart-axis category-axis">
            <line
                x1=num(frame.plot_left())
                x2=num(frame.plot_right())
                y1=bottom.clone()
                y2=bottom
            />
            {labels}
        </g>
    }
}

#[component]
fn Legend(series: Vec<Series>) -> impl IntoView {
    view! {
        <figcaption class="chart-legend">
            {series
                .iter()
                .map(|s| {
                    view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", s.color)></span>
                            {s.label}
                        </span>
                    }
                })
                .collect_view()}
        </figcaption>
    }
}

fn view_box(frame: &Frame) -> String {
    format!("0 0 {} {}", num(frame.width), num(frame.height))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::data::{PHASES, accuracy_chart, energy_chart, volume_chart};
    use leptos::tachys::view::RenderHtml;

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn accuracy_chart_draws_three_bars() {
        let html = view! { <BarChart data=accuracy_chart() /> }.to_html();
        assert_eq!(count(&html, r#"class="chart-bar""#), 3);
        assert_eq!(count(&html, r#"class="bar-group""#), 3);
        assert!(html.contains("Top-3: 92"));
        // single series: no legend
        assert!(!html.contains("chart-legend"));
    }

    #[test]
    fn volume_chart_draws_two_groups() {
        let html = view! { <BarChart data=volume_chart() /> }.to_html();
        assert_eq!(count(&html, r#"class="bar-group""#), 2);
        assert_eq!(count(&html, r#"class="chart-bar""#), 4);
        assert!(html.contains("Baseline rmse: 7.2"));
        assert!(html.contains("chart-legend"));
    }

    #[test]
    fn energy_chart_draws_five_points_per_series() {
        let html = view! { <LineChart data=energy_chart() /> }.to_html();
        assert_eq!(count(&html, r#"class="chart-line""#), 2);
        assert_eq!(count(&html, r#"class="chart-dot""#), 10);
        assert!(html.contains("Al2O3 predicted: -9.1"));
        assert!(html.contains("-7.5"));
    }

    #[test]
    fn phase_chart_draws_three_slices() {
        let html = view! { <PieChart shares=PHASES /> }.to_html();
        assert_eq!(count(&html, r#"class="pie-slice""#), 3);
        assert!(html.contains("Metastable 25%"));
        assert!(html.contains("#dc2626"));
    }

    #[test]
    fn empty_data_renders_axes_only() {
        let data = CategoricalData {
            categories: vec![],
            series: vec![],
        };
        let html = view! { <BarChart data=data /> }.to_html();
        assert_eq!(count(&html, r#"class="chart-bar""#), 0);
        assert!(html.contains("value-axis"));
    }
}
