use crate::RdhxError;

/// Piecewise-linear interpolation over a tabulated breakpoint series.
///
/// `xs` must be strictly increasing and the same length as `ys`. Queries
/// outside the table range clamp to the first/last value.
pub fn lerp_table(xs: &[f64], ys: &[f64], x: f64) -> Result<f64, RdhxError> {
    if xs.len() != ys.len() || xs.is_empty() {
        return Err(RdhxError::InvalidArg {
            what: "interpolation table shape",
        });
    }
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[xs.len() - 1] {
        return Ok(ys[ys.len() - 1]);
    }
    for i in 0..xs.len() - 1 {
        let (x1, x2) = (xs[i], xs[i + 1]);
        if x1 <= x && x <= x2 {
            let (y1, y2) = (ys[i], ys[i + 1]);
            return Ok(y1 + (y2 - y1) * (x - x1) / (x2 - x1));
        }
    }
    // Unreachable for strictly increasing xs
    Err(RdhxError::Invariant {
        what: "interpolation breakpoints not increasing",
    })
}
