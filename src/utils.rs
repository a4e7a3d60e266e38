//! Utilities

/// Clamp a value to the given range
pub fn clamp<T>(value: T, min: T, max: T) -> T where T: PartialOrd {
    if value < min { min } else if value > max { max } else { value }
}

/// Find minimum of three values
pub fn min3<T>(a: T, b: T, c: T) -> T where T: PartialOrd {
    let ab = if a < b { a } else { b };
    if ab < c { ab } else { c }
}

/// Find maximum of three values
pub fn max3<T>(a: T, b: T, c: T) -> T where T: PartialOrd {
    let ab = if a > b { a } else { b };
    if ab > c { ab } else { c }
}
