//! Command implementations.
//!
//! Each command returns the text to print so the formatting can be tested
//! without capturing stdout.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use darkroom_catalog::Catalog;
use darkroom_exposure::{
    PrintSize, adjust_time_by_points, adjust_time_by_stops, point_difference_to_multiplier,
    resize_print_in_stops, stop_difference_to_multiplier, time_difference_in_points,
    time_difference_in_stops,
};

/// An exposure change in one of the two units printers use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    Stops(f64),
    Points(f64),
}

impl Delta {
    /// Build a delta from the mutually exclusive `--stops`/`--points` flags.
    pub fn from_flags(stops: Option<f64>, points: Option<f64>) -> Result<Self> {
        match (stops, points) {
            (Some(stops), None) => Ok(Delta::Stops(stops)),
            (None, Some(points)) => Ok(Delta::Points(points)),
            _ => bail!("give exactly one of --stops or --points"),
        }
    }
}

/// `darkroom stops`: how far apart two exposure times are.
pub fn stops(base: f64, new: f64, precision: usize) -> Result<String> {
    let stops = time_difference_in_stops(base, new)?;
    let points = time_difference_in_points(base, new)?;
    Ok(format!(
        "{stops:+.precision$} stops ({points:+.precision$} points)"
    ))
}

/// `darkroom adjust`: a base time moved by some stops or points.
pub fn adjust(base: f64, delta: Delta, precision: usize) -> Result<String> {
    let time = match delta {
        Delta::Stops(stops) => adjust_time_by_stops(base, stops)?,
        Delta::Points(points) => adjust_time_by_points(base, points)?,
    };
    Ok(format!("{time:.precision$}s"))
}

/// `darkroom multiplier`: the factor a delta applies to any time.
#[must_use]
pub fn multiplier(delta: Delta, precision: usize) -> String {
    let factor = match delta {
        Delta::Stops(stops) => stop_difference_to_multiplier(stops),
        Delta::Points(points) => point_difference_to_multiplier(points),
    };
    format!("x{factor:.precision$}")
}

/// `darkroom resize`: compensation for printing at a new size.
pub fn resize(old: PrintSize, new: PrintSize, time: Option<f64>, precision: usize) -> Result<String> {
    let stops = resize_print_in_stops(old, new)?;
    let fitted = old.fit_within(new)?;
    let mut out = format!(
        "{old} -> {:.precision$}x{:.precision$}: {stops:+.precision$} stops",
        fitted.x, fitted.y
    );
    if let Some(time) = time {
        let adjusted = adjust_time_by_stops(time, stops)?;
        write!(out, ", {time:.precision$}s -> {adjusted:.precision$}s")?;
    }
    Ok(out)
}

/// `darkroom catalog check`: record counts of a validated catalog.
#[must_use]
pub fn catalog_check(catalog: &Catalog) -> String {
    catalog
        .counts()
        .into_iter()
        .map(|(kind, count)| format!("{kind:>15}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `darkroom catalog prints`: one line per print, oldest first.
pub fn catalog_prints(catalog: &Catalog, precision: usize) -> Result<String> {
    let mut out = String::new();
    for (_, print) in catalog.prints_sorted() {
        let finish = catalog.finishes().require(print.finish)?;
        write!(
            out,
            "{}  {} ({})",
            print.label(),
            catalog.paper_label(print.paper)?,
            finish.name
        )?;
        if let Some(frame) = print.frame {
            write!(out, "  {}", catalog.frame_label(frame)?)?;
        }
        if let (Some(size), Some(seconds)) = (print.size, print.exposure_seconds) {
            write!(out, "  {size} @ {seconds:.precision$}s")?;
        }
        out.push('\n');
    }
    Ok(out.trim_end().to_string())
}

/// `darkroom catalog reprint`: exposure for re-printing a catalogued print.
pub fn catalog_reprint(
    catalog: &Catalog,
    label: &str,
    new: PrintSize,
    precision: usize,
) -> Result<String> {
    let (_, print) = catalog
        .find_print(label)
        .with_context(|| format!("no print labelled '{label}' in catalog"))?;
    let seconds = print.exposure_for_size(new)?;
    Ok(format!("{label} at {new}: {seconds:.precision$}s"))
}
