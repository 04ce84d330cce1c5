use crate::core::ballistics::TrajectoryResult;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// World-space bounds a chart is drawn in. Always contains the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub fn fit(result: &TrajectoryResult) -> Self {
        let (raw_x_min, raw_x_max) = bounds(result.x_positions());
        let (raw_y_min, raw_y_max) = bounds(result.y_positions());
        let (x_min, x_max) = padded(raw_x_min, raw_x_max, X_PADDING_RATIO);
        let (y_min, y_max) = padded(raw_y_min, raw_y_max, Y_PADDING_RATIO);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Grows whichever axis is short so that `x_span / y_span == ratio`.
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        if !(ratio.is_finite() && ratio > 0.0) {
            return self;
        }
        if self.x_span() / self.y_span() < ratio {
            let extra = self.y_span() * ratio - self.x_span();
            if self.x_min < 0.0 && self.x_max <= 0.0 {
                self.x_min -= extra;
            } else {
                self.x_max += extra;
            }
        } else {
            self.y_max = self.y_min + self.x_span() / ratio;
        }
        self
    }

    /// Maps a world point to `[0, 1]` on both axes, `(0, 0)` at the lower left.
    pub fn to_unit(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.x_min) / self.x_span(),
            (y - self.y_min) / self.y_span(),
        )
    }
}

// Seeded with zero so the launch point is always inside.
fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

// `lo <= 0 <= hi` on entry. Only the side the data extends to is padded so the
// launch point stays on the frame edge.
fn padded(lo: f64, hi: f64, ratio: f64) -> (f64, f64) {
    let pad = (hi - lo) * ratio;
    let padded_lo = if lo < 0.0 { lo - pad } else { lo };
    let padded_hi = if lo < 0.0 && hi <= 0.0 { hi } else { hi + pad };

    if padded_hi - padded_lo >= MIN_SPAN_M {
        (padded_lo, padded_hi)
    } else if lo < 0.0 && hi <= 0.0 {
        (padded_hi - MIN_SPAN_M, padded_hi)
    } else {
        (padded_lo, padded_lo + MIN_SPAN_M)
    }
}
