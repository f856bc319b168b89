// this file turns SVG path data into quadratic glyph contours, one per subpath
use kurbo::{Arc, CubicBez, Point, SvgArc, Vec2};
use svgtypes::{PathParser, PathSegment};

use crate::contour::{close_contour, Contour, ContourPoint};
use crate::error::Error;
use crate::options::Options;

// below this the cubic split count stops being finite
const MIN_TOLERANCE: f64 = 1e-6;

/// `d`: every subpath becomes its own contour.
pub fn path(params: &[Option<&str>], options: &Options) -> Result<Vec<Contour>, Error> {
    match params.get(0).cloned().unwrap_or(None) {
        Some(d) => parse_path_data(d, options.curve_tolerance),
        None => Ok(Vec::new()),
    }
}

struct OutlineBuilder {
    tolerance: f64,
    contours: Vec<Contour>,
    current: Contour,
}

impl OutlineBuilder {
    fn new(tolerance: f64) -> OutlineBuilder {
        OutlineBuilder{
            tolerance: tolerance.max(MIN_TOLERANCE),
            contours: Vec::new(),
            current: Contour::new(),
        }
    }
    fn move_to(&mut self, p: Point) {
        self.finish();
        self.current.push(ContourPoint::on(p.x, p.y));
    }
    // a drawing command right after `z` starts a new subpath at the old start
    fn ensure_started(&mut self, from: Point) {
        if self.current.is_empty() {
            self.current.push(ContourPoint::on(from.x, from.y));
        }
    }
    fn line_to(&mut self, from: Point, p: Point) {
        self.ensure_started(from);
        self.current.push(ContourPoint::on(p.x, p.y));
    }
    fn quad_to(&mut self, from: Point, ctrl: Point, p: Point) {
        self.ensure_started(from);
        self.current.push(ContourPoint::off(ctrl.x, ctrl.y));
        self.current.push(ContourPoint::on(p.x, p.y));
    }
    /// Cubics become evenly split quadratics within tolerance.
    fn cubic_to(&mut self, from: Point, c1: Point, c2: Point, p: Point) {
        let quads: Vec<_> = CubicBez::new(from, c1, c2, p).to_quads(self.tolerance).collect();
        let last = quads.len().saturating_sub(1);
        let mut start = from;
        for (i, (_, _, quad)) in quads.into_iter().enumerate() {
            // land exactly on the requested endpoint
            let end = if i == last { p } else { quad.p2 };
            self.quad_to(start, quad.p1, end);
            start = end;
        }
    }
    fn arc_to(&mut self, from: Point, radii: Vec2, rotation: f64, large_arc: bool, sweep: bool, to: Point) {
        if from == to {
            return
        }
        let svg_arc = SvgArc{
            from: from,
            to: to,
            radii: Vec2::new(radii.x.abs(), radii.y.abs()),
            x_rotation: rotation.to_radians(),
            large_arc: large_arc,
            sweep: sweep,
        };
        let arc = match Arc::from_svg_arc(&svg_arc) {
            Some(arc) => arc,
            None => {
                // zero radius
                self.line_to(from, to);
                return
            },
        };
        let mut cubics = Vec::new();
        arc.to_cubic_beziers(self.tolerance, |c1, c2, end| cubics.push((c1, c2, end)));
        let last = cubics.len().saturating_sub(1);
        let mut start = from;
        for (i, (c1, c2, end)) in cubics.into_iter().enumerate() {
            let end = if i == last { to } else { end };
            self.cubic_to(start, c1, c2, end);
            start = end;
        }
    }
    fn finish(&mut self) {
        let contour = std::mem::replace(&mut self.current, Contour::new());
        if let Some(contour) = close_contour(contour) {
            self.contours.push(contour);
        }
    }
}

fn resolve(abs: bool, base: Point, x: f64, y: f64) -> Point {
    if abs {
        Point::new(x, y)
    } else {
        Point::new(base.x + x, base.y + y)
    }
}

fn reflect(ctrl: Option<Point>, about: Point) -> Point {
    match ctrl {
        Some(c) => about + (about - c),
        None => about,
    }
}

pub fn parse_path_data(d: &str, tolerance: f64) -> Result<Vec<Contour>, Error> {
    let mut out = OutlineBuilder::new(tolerance);
    let mut cur = Point::ZERO;
    let mut start = Point::ZERO;
    let mut last_cubic_ctrl: Option<Point> = None;
    let mut last_quad_ctrl: Option<Point> = None;
    let mut started = false;

    for segment in PathParser::from(d) {
        let segment = segment.map_err(|e| Error::path_data(d, e.to_string()))?;
        if !started {
            match segment {
                PathSegment::MoveTo { .. } => started = true,
                _ => return Err(Error::path_data(d, "path data must start with a moveto")),
            }
        }
        let mut next_cubic_ctrl = None;
        let mut next_quad_ctrl = None;
        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                cur = resolve(abs, cur, x, y);
                start = cur;
                out.move_to(cur);
            },
            PathSegment::LineTo { abs, x, y } => {
                let p = resolve(abs, cur, x, y);
                out.line_to(cur, p);
                cur = p;
            },
            PathSegment::HorizontalLineTo { abs, x } => {
                let p = Point::new(if abs { x } else { cur.x + x }, cur.y);
                out.line_to(cur, p);
                cur = p;
            },
            PathSegment::VerticalLineTo { abs, y } => {
                let p = Point::new(cur.x, if abs { y } else { cur.y + y });
                out.line_to(cur, p);
                cur = p;
            },
            PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                let c1 = resolve(abs, cur, x1, y1);
                let c2 = resolve(abs, cur, x2, y2);
                let p = resolve(abs, cur, x, y);
                out.cubic_to(cur, c1, c2, p);
                next_cubic_ctrl = Some(c2);
                cur = p;
            },
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c1 = reflect(last_cubic_ctrl, cur);
                let c2 = resolve(abs, cur, x2, y2);
                let p = resolve(abs, cur, x, y);
                out.cubic_to(cur, c1, c2, p);
                next_cubic_ctrl = Some(c2);
                cur = p;
            },
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let c = resolve(abs, cur, x1, y1);
                let p = resolve(abs, cur, x, y);
                out.quad_to(cur, c, p);
                next_quad_ctrl = Some(c);
                cur = p;
            },
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let c = reflect(last_quad_ctrl, cur);
                let p = resolve(abs, cur, x, y);
                out.quad_to(cur, c, p);
                next_quad_ctrl = Some(c);
                cur = p;
            },
            PathSegment::EllipticalArc { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
                let p = resolve(abs, cur, x, y);
                out.arc_to(cur, Vec2::new(rx, ry), x_axis_rotation, large_arc, sweep, p);
                cur = p;
            },
            PathSegment::ClosePath { .. } => {
                out.line_to(cur, start);
                out.finish();
                cur = start;
            },
        }
        last_cubic_ctrl = next_cubic_ctrl;
        last_quad_ctrl = next_quad_ctrl;
    }
    out.finish();
    trace!("path data gave {} contours", out.contours.len());
    Ok(out.contours)
}
