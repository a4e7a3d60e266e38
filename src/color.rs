//! Predefined vertex color formats.
//!
//! Colors are plain nalgebra vectors, so they interpolate component-wise through
//! [`Interpolate`](../interpolate/trait.Interpolate.html).

pub mod formats {
    use nalgebra::{Vector2, Vector3, Vector4};

    /// RGBA 8-bit Unsigned Integer Color
    pub type RGBAu8Color = Vector4<u8>;
    /// RGB 8-bit Unsigned Integer Color
    pub type RGBu8Color = Vector3<u8>;
    /// Red-Green 8-bit Unsigned Integer Color
    pub type RGu8Color = Vector2<u8>;

    /// RGBA 16-bit Unsigned Integer Color
    pub type RGBAu16Color = Vector4<u16>;

    #[cfg(test)]
    mod test {
        use ::interpolate::Interpolate;

        use super::*;

        fn assert_interpolate<T: Interpolate>() {}

        #[test]
        fn test_u8_color_interpolate() {
            assert_interpolate::<RGBAu8Color>();
            assert_interpolate::<RGBu8Color>();
            assert_interpolate::<RGu8Color>();
            assert_interpolate::<RGBAu16Color>();
        }
    }
}

pub use self::formats::RGBAu8Color;

/// Shorthand for an opaque RGBA color
#[inline]
pub fn rgb(red: u8, green: u8, blue: u8) -> formats::RGBAu8Color {
    formats::RGBAu8Color::new(red, green, blue, 255)
}
