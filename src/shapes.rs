// Outline generators for the basic shapes. Each takes the raw attribute values
// in registry order and returns an empty contour when there is nothing to draw.
use std::f64::consts::PI;

use svgtypes::PointsParser;

use crate::contour::{close_contour, Contour, ContourPoint};
use crate::error::Error;
use crate::number::attr_float;
use crate::options::Options;

fn param<'a>(params: &[Option<&'a str>], index: usize) -> Option<&'a str> {
    params.get(index).cloned().unwrap_or(None)
}

/// `cx, cy, rx[, ry]`, shared by `circle` (which has no `ry`) and `ellipse`.
pub fn oval(params: &[Option<&str>], _options: &Options) -> Result<Contour, Error> {
    let cx = attr_float(param(params, 0)).unwrap_or(0.0);
    let cy = attr_float(param(params, 1)).unwrap_or(0.0);
    let rx = match attr_float(param(params, 2)) {
        Some(r) if r > 0.0 => r,
        _ => return Ok(Contour::new()),
    };
    let ry = match param(params, 3) {
        None => rx,
        Some(raw) if raw.trim() == "auto" => rx,
        Some(raw) => match attr_float(Some(raw)) {
            Some(r) if r > 0.0 => r,
            _ => return Ok(Contour::new()),
        },
    };
    Ok(oval_contour(cx, cy, rx, ry))
}

/// Eight quadratic arcs; control points sit on the 22.5 degree bisectors,
/// pushed out so each arc touches the ellipse at its ends.
fn oval_contour(cx: f64, cy: f64, rx: f64, ry: f64) -> Contour {
    let step = PI / 4.;
    let reach = 1. / (step / 2.).cos();
    let mut ret = Contour::with_capacity(16);
    for i in 0..8 {
        let on = i as f64 * step;
        let off = on + step / 2.;
        ret.push(ContourPoint::on(cx + rx * on.cos(), cy + ry * on.sin()));
        ret.push(ContourPoint::off(cx + rx * reach * off.cos(), cy + ry * reach * off.sin()));
    }
    ret
}

/// `x, y, width, height`
pub fn rect(params: &[Option<&str>], _options: &Options) -> Result<Contour, Error> {
    let x = attr_float(param(params, 0)).unwrap_or(0.0);
    let y = attr_float(param(params, 1)).unwrap_or(0.0);
    let (width, height) = match (attr_float(param(params, 2)), attr_float(param(params, 3))) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => return Ok(Contour::new()),
    };
    Ok(vec![ContourPoint::on(x, y),
            ContourPoint::on(x + width, y),
            ContourPoint::on(x + width, y + height),
            ContourPoint::on(x, y + height),
    ])
}

/// `points`, shared by `polygon` and `polyline` (glyph contours are always closed).
/// A repeated start point at the end is dropped, like a path's closing point.
pub fn polygon(params: &[Option<&str>], _options: &Options) -> Result<Contour, Error> {
    let points = match param(params, 0) {
        Some(p) => unpack_polygon_points(p),
        None => return Ok(Contour::new()),
    };
    let contour = points.into_iter().map(|(x, y)| ContourPoint::on(x, y)).collect();
    Ok(close_contour(contour).unwrap_or_default())
}

/// Coordinate pairs up to the first bad token; an odd trailing coordinate is dropped.
fn unpack_polygon_points(input: &str) -> Vec<(f64, f64)> {
    let ret: Vec<(f64, f64)> = PointsParser::from(input).collect();
    trace!("{} polygon points", ret.len());
    ret
}
