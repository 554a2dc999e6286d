// Math utilities and helper functions

/// Inputs with a smaller magnitude than this are treated as released
pub const AXIS_DEAD_ZONE: f32 = 0.1;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Zero out axis values inside the dead zone and clamp the rest to [-1, 1]
pub fn apply_dead_zone(axis: f32) -> f32 {
    if axis.abs() < AXIS_DEAD_ZONE {
        0.0
    } else {
        clamp(axis, -1.0, 1.0)
    }
}

/// Sign of a value as -1, 0 or 1 (unlike `f32::signum`, zero maps to zero)
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
