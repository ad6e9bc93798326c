use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::report::ReportError;
use crate::report::regression::{LinearFit, fit_linear};

const WIDTH: u32 = 900;
const HEIGHT: u32 = 700;
const BAND_STEPS: usize = 60;

pub fn write_regression_plot(
    path: &Path,
    points: &[(f64, f64)],
    x_label: &str,
    y_label: &str,
) -> Result<(), ReportError> {
    let plot_err = |message: String| ReportError::Plot {
        path: path.to_path_buf(),
        message,
    };

    let points: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    let fit = fit_linear(&points);
    let x_range = padded_range(points.iter().map(|p| p.0));
    let band = fit.map(|f| band_points(&f, &x_range)).unwrap_or_default();
    let y_range = padded_range(
        points
            .iter()
            .map(|p| p.1)
            .chain(band.iter().flat_map(|b| [b.1, b.3])),
    );

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{y_label} vs {x_label}"), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| plot_err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| plot_err(e.to_string()))?;

    if !band.is_empty() {
        let mut outline: Vec<(f64, f64)> = band.iter().map(|b| (b.0, b.3)).collect();
        outline.extend(band.iter().rev().map(|b| (b.0, b.1)));
        chart
            .draw_series(std::iter::once(Polygon::new(outline, RED.mix(0.15).filled())))
            .map_err(|e| plot_err(e.to_string()))?;

        let line: Vec<(f64, f64)> = band.iter().map(|b| (b.0, b.2)).collect();
        chart
            .draw_series(std::iter::once(PathElement::new(line, RED.stroke_width(2))))
            .map_err(|e| plot_err(e.to_string()))?;
    }

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.mix(0.8).filled())),
        )
        .map_err(|e| plot_err(e.to_string()))?;

    root.present().map_err(|e| plot_err(e.to_string()))?;
    Ok(())
}

fn band_points(fit: &LinearFit, x_range: &Range<f64>) -> Vec<(f64, f64, f64, f64)> {
    let step = (x_range.end - x_range.start) / BAND_STEPS as f64;
    (0..=BAND_STEPS)
        .map(|i| {
            let x = x_range.start + step * i as f64;
            let y = fit.predict(x);
            let hw = fit.confidence_half_width(x).unwrap_or(0.0);
            (x, y - hw, y, y + hw)
        })
        .collect()
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.06 } else { lo.abs().max(1.0) * 0.06 };
    (lo - pad)..(hi + pad)
}
