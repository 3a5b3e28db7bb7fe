use shared::DiagnosisEntry;
use yew::prelude::*;

pub const BENIGN_COLOR: &str = "#0EA5E9";
pub const MALIGNANT_COLOR: &str = "#EF4444";
pub const FALLBACK_COLOR: &str = "#ccc";

/// One slice of the probability pie: the backend's name/value verbatim plus
/// the fixed reference color for that class.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

pub fn class_color(name: &str) -> &'static str {
    match name {
        "Benign" => BENIGN_COLOR,
        "Malignant" => MALIGNANT_COLOR,
        _ => FALLBACK_COLOR,
    }
}

/// Maps the diagnosis distribution straight into chart segments. Values are
/// carried as provided, with no aggregation or renormalization.
pub fn chart_series(diagnosis: &[DiagnosisEntry]) -> Vec<Segment> {
    diagnosis
        .iter()
        .map(|entry| Segment {
            name: entry.name.clone(),
            value: entry.value,
            color: class_color(&entry.name),
        })
        .collect()
}

const CX: f64 = 110.0;
const CY: f64 = 110.0;
const RADIUS: f64 = 100.0;

fn rim_point(fraction: f64) -> (f64, f64) {
    // Slices start at 12 o'clock and run clockwise.
    let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin())
}

fn slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = rim_point(start);
    let (x2, y2) = rim_point(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {CX:.2} {CY:.2} L {x1:.2} {y1:.2} A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

/// Renders the series as an SVG pie. A series whose positive weight sits in
/// a single slice degenerates to a full disc, since an arc from a point to
/// itself would vanish.
pub fn render_pie(series: &[Segment]) -> Html {
    let total: f64 = series.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return html! {};
    }

    let positive: Vec<&Segment> = series.iter().filter(|s| s.value > 0.0).collect();
    let slices = if positive.len() == 1 {
        let segment = positive[0];
        html! {
            <circle cx={CX.to_string()} cy={CY.to_string()} r={RADIUS.to_string()}
                fill={segment.color}>
                <title>{ format!("{}: {}", segment.name, segment.value) }</title>
            </circle>
        }
    } else {
        let mut cursor = 0.0;
        series
            .iter()
            .filter(|s| s.value > 0.0)
            .map(|segment| {
                let start = cursor;
                cursor += segment.value / total;
                html! {
                    <path d={slice_path(start, cursor)} fill={segment.color}>
                        <title>{ format!("{}: {}", segment.name, segment.value) }</title>
                    </path>
                }
            })
            .collect::<Html>()
    };

    html! {
        <svg class="diagnosis-pie" viewBox="0 0 220 220" width="220" height="220"
            role="img" aria-label="Probability distribution">
            { slices }
        </svg>
    }
}

pub fn render_legend(series: &[Segment]) -> Html {
    html! {
        <ul class="chart-legend">
            { for series.iter().map(|segment| html! {
                <li key={segment.name.clone()}>
                    <span class="legend-swatch"
                        style={format!("background-color: {};", segment.color)} />
                    { format!("{}: {}", segment.name, segment.value) }
                </li>
            })}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: f64) -> DiagnosisEntry {
        DiagnosisEntry {
            name: name.into(),
            value,
        }
    }

    #[test]
    fn series_carries_values_verbatim() {
        let series = chart_series(&[entry("Benign", 70.0), entry("Malignant", 30.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 70.0);
        assert_eq!(series[1].value, 30.0);
        assert_eq!(series.iter().map(|s| s.value).sum::<f64>(), 100.0);
    }

    #[test]
    fn known_classes_get_reference_colors() {
        let series = chart_series(&[entry("Benign", 70.0), entry("Malignant", 30.0)]);
        assert_eq!(series[0].color, BENIGN_COLOR);
        assert_eq!(series[1].color, MALIGNANT_COLOR);
    }

    #[test]
    fn unknown_class_falls_back_to_neutral() {
        assert_eq!(class_color("Suspicious"), FALLBACK_COLOR);
        // Lookup is case-sensitive, matching the reference styling table.
        assert_eq!(class_color("benign"), FALLBACK_COLOR);
    }

    #[test]
    fn empty_diagnosis_yields_empty_series() {
        assert!(chart_series(&[]).is_empty());
    }

    #[test]
    fn unnormalized_values_are_preserved() {
        // Weights that do not sum to 100 pass through untouched.
        let series = chart_series(&[entry("Benign", 0.7), entry("Malignant", 0.2)]);
        assert_eq!(series[0].value, 0.7);
        assert_eq!(series[1].value, 0.2);
    }

    #[test]
    fn slice_geometry_starts_at_twelve_oclock() {
        let (x, y) = rim_point(0.0);
        assert!((x - CX).abs() < 1e-9);
        assert!((y - (CY - RADIUS)).abs() < 1e-9);

        let (x, y) = rim_point(0.25);
        assert!((x - (CX + RADIUS)).abs() < 1e-9);
        assert!((y - CY).abs() < 1e-9);
    }

    #[test]
    fn majority_slice_uses_large_arc_flag() {
        assert!(slice_path(0.0, 0.7).contains(" 1 1 "));
        assert!(slice_path(0.7, 1.0).contains(" 0 1 "));
    }
}
