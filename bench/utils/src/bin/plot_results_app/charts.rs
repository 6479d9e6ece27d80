//! Chart rendering.
//!
//! Log axes are drawn by projecting values through `log10` onto a linear
//! coordinate system and labelling ticks with the original magnitude, so every
//! chart shares one concrete coordinate type.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::catalog::AlgorithmSeries;

pub(crate) const COMPARISON_SIZE: (u32, u32) = (1000, 600);
pub(crate) const SUMMARY_SIZE: (u32, u32) = (1200, 1500);

const Y_DESC: &str = "Execution Time (seconds)";
const PANEL_Y_DESC: &str = "Time (s)";

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Axes {
    pub(crate) x_log: bool,
    pub(crate) y_log: bool,
}

impl Axes {
    pub(crate) const LINEAR: Axes = Axes {
        x_log: false,
        y_log: false,
    };

    pub(crate) fn log_x(enabled: bool) -> Self {
        Axes {
            x_log: enabled,
            y_log: false,
        }
    }

    pub(crate) fn log_log(enabled: bool) -> Self {
        Axes {
            x_log: enabled,
            y_log: enabled,
        }
    }

    /// Map a data point into chart space. Points that cannot be shown on a
    /// log axis (zero or negative) are dropped.
    pub(crate) fn project(&self, (x, y): (f64, f64)) -> Option<(f64, f64)> {
        Some((project_value(x, self.x_log)?, project_value(y, self.y_log)?))
    }
}

fn project_value(value: f64, log: bool) -> Option<f64> {
    match log {
        false => Some(value),
        true if value > 0.0 => Some(value.log10()),
        true => None,
    }
}

fn unproject_value(value: f64, log: bool) -> f64 {
    if log {
        10f64.powf(value)
    } else {
        value
    }
}

/// Tick label for a value in data space.
pub(crate) fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e4).contains(&magnitude) {
        format!("{value:.0e}")
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Padded range covering `values`. Degenerate inputs get a unit-wide range.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }

    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Projected `(label, points)` for every series that has something to draw.
pub(crate) fn projected_series(data: &AlgorithmSeries, axes: Axes) -> Vec<(String, Vec<(f64, f64)>)> {
    data.present()
        .map(|series| {
            let points: Vec<(f64, f64)> = series
                .points()
                .into_iter()
                .filter_map(|p| axes.project(p))
                .collect();
            (series.label.clone(), points)
        })
        .filter(|(_, points)| !points.is_empty())
        .collect()
}

fn draw_panel(
    area: &Area<'_>,
    data: &AlgorithmSeries,
    axes: Axes,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
) -> Result<(), Box<dyn Error>> {
    let series = projected_series(data, axes);
    let x_range = padded_range(series.iter().flat_map(|(_, p)| p.iter().map(|&(x, _)| x)));
    let y_range = padded_range(series.iter().flat_map(|(_, p)| p.iter().map(|&(_, y)| y)));

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let x_formatter = |v: &f64| format_tick(unproject_value(*v, axes.x_log));
    let y_formatter = |v: &f64| format_tick(unproject_value(*v, axes.y_log));
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()?;

    for (idx, (label, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// One algorithm, every available series, on a single chart.
pub(crate) fn render_comparison(
    out_path: &Path,
    data: &AlgorithmSeries,
    axes: Axes,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, COMPARISON_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("{} - Performance Comparison", data.algorithm.name());
    draw_panel(
        &root,
        data,
        axes,
        &caption,
        data.algorithm.x_desc(),
        Y_DESC,
    )?;

    root.present()?;
    Ok(())
}

/// One stacked panel per algorithm. Panels whose primary series is missing
/// stay blank.
pub(crate) fn render_summary(
    out_path: &Path,
    panels: &[(&AlgorithmSeries, Axes)],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, SUMMARY_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((panels.len().max(1), 1));

    for (area, (data, axes)) in areas.iter().zip(panels) {
        if !data.has_data() {
            continue;
        }
        let caption = format!("{} Performance", data.algorithm.name());
        draw_panel(
            area,
            data,
            *axes,
            &caption,
            data.algorithm.panel_x_desc(),
            PANEL_Y_DESC,
        )?;
    }

    root.present()?;
    Ok(())
}
