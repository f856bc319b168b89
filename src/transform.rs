// Parses SVG transform attributes and applies ordered transform lists to contours.
use kurbo::{Affine, Point};
use svgtypes::{TransformListParser, TransformListToken};

use crate::contour::{Contour, ContourPoint};
use crate::error::Error;

/// One primitive from a `transform` attribute, arguments already defaulted.
/// `rotate(a cx cy)` arrives as translate, rotate, translate.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransformOp {
    Matrix { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    /// Degrees.
    Rotate { angle: f64 },
    SkewX(f64),
    SkewY(f64),
}

impl TransformOp {
    pub fn to_affine(&self) -> Affine {
        match *self {
            TransformOp::Matrix { a, b, c, d, e, f } => Affine::new([a, b, c, d, e, f]),
            TransformOp::Translate { tx, ty } => Affine::translate((tx, ty)),
            TransformOp::Scale { sx, sy } => Affine::scale_non_uniform(sx, sy),
            TransformOp::Rotate { angle } => Affine::rotate(angle.to_radians()),
            TransformOp::SkewX(angle) => Affine::skew(angle.to_radians().tan(), 0.),
            TransformOp::SkewY(angle) => Affine::skew(0., angle.to_radians().tan()),
        }
    }
}

impl From<TransformListToken> for TransformOp {
    fn from(token: TransformListToken) -> TransformOp {
        match token {
            TransformListToken::Matrix { a, b, c, d, e, f } => TransformOp::Matrix{a:a, b:b, c:c, d:d, e:e, f:f},
            TransformListToken::Translate { tx, ty } => TransformOp::Translate{tx:tx, ty:ty},
            TransformListToken::Scale { sx, sy } => TransformOp::Scale{sx:sx, sy:sy},
            TransformListToken::Rotate { angle } => TransformOp::Rotate{angle:angle},
            TransformListToken::SkewX { angle } => TransformOp::SkewX(angle),
            TransformListToken::SkewY { angle } => TransformOp::SkewY(angle),
        }
    }
}

/// Parse a transform list, e.g. `"translate(10, 20) rotate(45)"`, keeping
/// the written order. Absent or blank input is an empty list.
pub fn parse_transform(input: Option<&str>) -> Result<Vec<TransformOp>, Error> {
    let input = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(Vec::new()),
    };
    let mut ret = Vec::new();
    for token in TransformListParser::from(input) {
        let token = token.map_err(|e| Error::transform(input, e.to_string()))?;
        ret.push(TransformOp::from(token));
    }
    Ok(ret)
}

/// Compose a transform list the way SVG reads it: the last op is applied
/// to the raw coordinates first, the first op last.
pub fn compose(ops: &[TransformOp]) -> Affine {
    ops.iter().fold(Affine::IDENTITY, |acc, op| acc * op.to_affine())
}

/// Apply an ordered transform list to every point of every contour.
/// Returns new contours; order and on/off-curve flags are kept.
pub fn apply_transforms(contours: &[Contour], ops: &[TransformOp]) -> Vec<Contour> {
    if ops.is_empty() {
        return contours.to_vec()
    }
    let m = compose(ops);
    contours.iter().map(|contour| {
        contour.iter().map(|p| {
            let moved = m * Point::new(p.x, p.y);
            ContourPoint{x:moved.x, y:moved.y, on_curve:p.on_curve}
        }).collect()
    }).collect()
}
