pub const DEFAULT_MAGNIFICATION: f32 = 60.0;
pub const DEFAULT_DISTANCE: f32 = 140.0;
pub const RESTING_WIDTH: f32 = 40.0;

/// Piecewise-linear interpolation through `(input[i], output[i])`.
///
/// `input` must be ascending. Values outside the input range clamp to the
/// first or last output.
pub fn interpolate(input: &[f32], output: &[f32], x: f32) -> f32 {
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if len == 1 || x <= input[0] {
        return output[0];
    }
    if x >= input[len - 1] {
        return output[len - 1];
    }

    for i in 1..len {
        let (x0, x1) = (input[i - 1], input[i]);
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return output[i];
            }
            let t = (x - x0) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[len - 1]
}

/// Magnification settings a dock broadcasts to each of its icons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnification {
    /// Width of an icon with the pointer exactly over its center.
    pub peak: f32,
    /// Pointer offset beyond which an icon is back at rest.
    pub distance: f32,
    pub resting: f32,
}

impl Magnification {
    pub fn new(peak: f32, distance: f32) -> Self {
        Self {
            peak,
            distance,
            ..Self::default()
        }
    }

    /// Whether the falloff is usable. A zero, negative, infinite or NaN
    /// distance turns magnification off and every icon stays at rest.
    pub fn is_active(&self) -> bool {
        self.distance > 0.0 && self.distance.is_finite()
    }

    /// Width for a signed pointer offset from an icon's center.
    pub fn width_at(&self, offset: f32) -> f32 {
        self.width_at_rest(offset, self.resting)
    }

    /// Same as [`Magnification::width_at`] with an explicit resting width.
    pub fn width_at_rest(&self, offset: f32, resting: f32) -> f32 {
        if !self.is_active() || offset.is_nan() {
            return resting;
        }
        interpolate(
            &[-self.distance, 0.0, self.distance],
            &[resting, self.peak, resting],
            offset,
        )
    }

    pub fn target_width(&self, pointer_x: f32, center_x: f32) -> f32 {
        self.width_at(pointer_x - center_x)
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self {
            peak: DEFAULT_MAGNIFICATION,
            distance: DEFAULT_DISTANCE,
            resting: RESTING_WIDTH,
        }
    }
}
