//! Минимальные SVG-графики для дашборда: линия, столбцы, круговая.
//!
//! Геометрия считается чистыми функциями, компоненты только рисуют.

use leptos::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;
const PALETTE: [&str; 6] = ["#4f46e5", "#16a34a", "#f59e0b", "#dc2626", "#0891b2", "#9333ea"];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Текст всплывающей подсказки
    pub hint: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    /// Radians, clockwise from 12 o'clock
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

/// SVG attribute value
fn n(value: f64) -> String {
    format!("{:.2}", value)
}

fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

fn scale_y(value: f64, max: f64) -> f64 {
    let plot = HEIGHT - 2.0 * PADDING;
    if max <= 0.0 {
        HEIGHT - PADDING
    } else {
        HEIGHT - PADDING - value / max * plot
    }
}

/// Точки линии: x равномерно по ширине, y от нуля до максимума
pub fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    let max = max_value(values);
    let plot = WIDTH - 2.0 * PADDING;
    let step = if values.len() > 1 {
        plot / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if values.len() == 1 {
                WIDTH / 2.0
            } else {
                PADDING + step * i as f64
            };
            (x, scale_y(v, max))
        })
        .collect()
}

pub fn bar_rects(values: &[f64]) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = max_value(values);
    let slot = (WIDTH - 2.0 * PADDING) / values.len() as f64;
    let width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = scale_y(v, max);
            BarRect {
                x: PADDING + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: HEIGHT - PADDING - y,
            }
        })
        .collect()
}

/// Доли круга; при нулевой сумме срезов нет
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let fraction = v.max(0.0) / total;
            let end = start + fraction * std::f64::consts::TAU;
            let slice = PieSlice {
                start,
                end,
                fraction,
            };
            start = end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path одного сектора
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    let (x1, y1) = polar(cx, cy, r, slice.start);
    let (x2, y2) = polar(cx, cy, r, slice.end);
    let large = if slice.end - slice.start > std::f64::consts::PI {
        1
    } else {
        0
    };
    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 1 {x2:.2} {y2:.2} Z"
    )
}

#[component]
fn EmptyChart() -> impl IntoView {
    view! { <div class="chart__empty">"No data"</div> }
}

#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            {move || {
                let data = points.get();
                if data.is_empty() {
                    return view! { <EmptyChart /> }.into_any();
                }
                let values: Vec<f64> = data.iter().map(|p| p.value).collect();
                let coords = line_points(&values);
                let polyline = coords
                    .iter()
                    .map(|(x, y)| format!("{:.2},{:.2}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                view! {
                    <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                        <line class="chart__axis" x1=n(PADDING) y1=n(HEIGHT - PADDING) x2=n(WIDTH - PADDING) y2=n(HEIGHT - PADDING) />
                        <polyline points=polyline fill="none" stroke=PALETTE[0] stroke-width="2" />
                        {data.into_iter().zip(coords).map(|(point, (x, y))| view! {
                            <g>
                                <circle cx=n(x) cy=n(y) r="4" fill=PALETTE[0] />
                                <text class="chart__value" x=n(x) y=n(y - 8.0) text-anchor="middle">
                                    {point.hint}
                                </text>
                                <text class="chart__label" x=n(x) y=n(HEIGHT - PADDING / 3.0) text-anchor="middle">
                                    {point.label}
                                </text>
                            </g>
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            {move || {
                let data = points.get();
                if data.is_empty() {
                    return view! { <EmptyChart /> }.into_any();
                }
                let values: Vec<f64> = data.iter().map(|p| p.value).collect();
                let rects = bar_rects(&values);
                view! {
                    <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                        <line class="chart__axis" x1=n(PADDING) y1=n(HEIGHT - PADDING) x2=n(WIDTH - PADDING) y2=n(HEIGHT - PADDING) />
                        {data.into_iter().zip(rects).enumerate().map(|(i, (point, rect))| view! {
                            <g>
                                <rect
                                    x=n(rect.x)
                                    y=n(rect.y)
                                    width=n(rect.width)
                                    height=n(rect.height)
                                    fill=PALETTE[i % PALETTE.len()]
                                />
                                <text class="chart__value" x=n(rect.x + rect.width / 2.0) y=n(rect.y - 6.0) text-anchor="middle">
                                    {point.hint}
                                </text>
                                <text class="chart__label" x=n(rect.x + rect.width / 2.0) y=n(HEIGHT - PADDING / 3.0) text-anchor="middle">
                                    {point.label}
                                </text>
                            </g>
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn PieChart(
    #[prop(into)] title: String,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    let (cx, cy, r) = (HEIGHT / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - PADDING / 2.0);

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            {move || {
                let data = points.get();
                let values: Vec<f64> = data.iter().map(|p| p.value).collect();
                let slices = pie_slices(&values);
                if slices.is_empty() {
                    return view! { <EmptyChart /> }.into_any();
                }
                view! {
                    <div class="chart__pie">
                        <svg class="chart__svg" viewBox=format!("0 0 {} {}", HEIGHT, HEIGHT)>
                            {slices.into_iter().enumerate().map(|(i, slice)| {
                                let color = PALETTE[i % PALETTE.len()];
                                // A full circle cannot be drawn as a single arc
                                if slice.fraction >= 0.9999 {
                                    view! { <circle cx=n(cx) cy=n(cy) r=n(r) fill=color /> }.into_any()
                                } else {
                                    view! { <path d=arc_path(cx, cy, r, &slice) fill=color /> }.into_any()
                                }
                            }).collect_view()}
                        </svg>
                        <ul class="chart__legend">
                            {data.into_iter().enumerate().map(|(i, point)| view! {
                                <li>
                                    <span class="chart__swatch" style=format!("background: {}", PALETTE[i % PALETTE.len()])></span>
                                    {point.hint}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_span_plot() {
        let points = line_points(&[0.0, 5.0, 10.0]);
        assert_eq!(points[0], (PADDING, HEIGHT - PADDING));
        assert_eq!(points[2], (WIDTH - PADDING, PADDING));
        assert_eq!(points[1].0, WIDTH / 2.0);
    }

    #[test]
    fn test_all_zero_values_sit_on_axis() {
        let rects = bar_rects(&[0.0, 0.0]);
        assert!(rects.iter().all(|r| r.height == 0.0));
        assert!(line_points(&[0.0]).iter().all(|(_, y)| *y == HEIGHT - PADDING));
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[3.0, 1.0]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].fraction, 0.75);
        assert!((slices[1].end - std::f64::consts::TAU).abs() < 1e-9);
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
    }
}
