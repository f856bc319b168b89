// Quadratic (TrueType style) outline points, and serializing them back to SVG path data.

// relative path data drifts by a few ulps on its way back to the start point
const CLOSE_EPSILON: f64 = 1e-9;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
    pub on_curve: bool,
}

impl ContourPoint {
    pub fn on(x: f64, y: f64) -> ContourPoint {
        ContourPoint{x:x, y:y, on_curve:true}
    }
    pub fn off(x: f64, y: f64) -> ContourPoint {
        ContourPoint{x:x, y:y, on_curve:false}
    }
    fn midpoint(&self, other: &ContourPoint) -> ContourPoint {
        ContourPoint::on((self.x + other.x) / 2., (self.y + other.y) / 2.)
    }
    fn coincides(&self, other: &ContourPoint) -> bool {
        (self.x - other.x).abs() <= CLOSE_EPSILON && (self.y - other.y).abs() <= CLOSE_EPSILON
    }
}

/// One closed outline. Off-curve points are quadratic control points; two
/// off-curve points in a row imply an on-curve point halfway between them.
pub type Contour = Vec<ContourPoint>;

/// Normalize a finished outline: trailing on-curve points that land back on
/// the start are dropped, and anything left with fewer than two points is
/// not a contour at all.
pub fn close_contour(mut contour: Contour) -> Option<Contour> {
    while contour.len() > 1 {
        let last = contour[contour.len() - 1];
        if !(last.on_curve && last.coincides(&contour[0])) {
            break
        }
        contour.pop();
    }
    if contour.len() >= 2 {
        Some(contour)
    } else {
        None
    }
}

/// Serialize contours as SVG path data, one `M ... Z` run per contour.
pub fn contours_to_path_data(contours: &[Contour]) -> String {
    let mut ret = String::new();
    for contour in contours {
        if contour.is_empty() {
            continue
        }
        if !ret.is_empty() {
            ret.push(' ');
        }
        write_contour(&mut ret, contour);
    }
    ret
}

fn write_contour(out: &mut String, contour: &[ContourPoint]) {
    let len = contour.len();
    // rotate so we start on an on-curve point, synthesizing one if there are none
    let (start, first, count) = match contour.iter().position(|p| p.on_curve) {
        Some(i) => (contour[i], i + 1, len - 1),
        None => (contour[len - 1].midpoint(&contour[0]), 0, len),
    };
    out.push_str(&format!("M{} {}", start.x, start.y));
    let mut pending: Option<ContourPoint> = None;
    for k in 0..count {
        let pt = contour[(first + k) % len];
        match (pending, pt.on_curve) {
            (None, true) => out.push_str(&format!(" L{} {}", pt.x, pt.y)),
            (None, false) => pending = Some(pt),
            (Some(ctrl), true) => {
                out.push_str(&format!(" Q{} {} {} {}", ctrl.x, ctrl.y, pt.x, pt.y));
                pending = None;
            },
            (Some(ctrl), false) => {
                let mid = ctrl.midpoint(&pt);
                out.push_str(&format!(" Q{} {} {} {}", ctrl.x, ctrl.y, mid.x, mid.y));
                pending = Some(pt);
            },
        }
    }
    if let Some(ctrl) = pending {
        out.push_str(&format!(" Q{} {} {} {}", ctrl.x, ctrl.y, start.x, start.y));
    }
    out.push_str(" Z");
}
