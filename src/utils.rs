use std::f32::consts::PI;

/// Linear interpolation between two f32 values
pub fn lerp(start: f32, end: f32, alpha: f32) -> f32 {
    start + (end - start) * alpha
}

/// Height of a half-sine arc at `alpha` in [0, 1]: 0 at both ends, `height` at 0.5
pub fn sine_arc(height: f32, alpha: f32) -> f32 {
    (alpha * PI).sin() * height
}

/// d/dalpha of [`sine_arc`]
pub fn sine_arc_slope(height: f32, alpha: f32) -> f32 {
    (alpha * PI).cos() * PI * height
}
