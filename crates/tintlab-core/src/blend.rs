//! Strength blending and final quantization.
//!
//! The last pipeline stage: interpolate between the untouched channel and
//! the fully processed one, then clamp and round into a byte.

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp to `[0, 255]` and round half away from zero.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

/// Blend an original channel with its processed value by `strength`.
///
/// # Example
/// ```
/// use tintlab_core::blend::blend;
///
/// assert_eq!(blend(10.0, 20.0, 0.5), 15);
/// assert_eq!(blend(255.0, 0.0, 1.0), 0);
/// ```
#[inline]
pub fn blend(original: f64, processed: f64, strength: f64) -> u8 {
    clamp_byte(mix(original, processed, strength))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: strength 0 returns the rounded original exactly.
        #[test]
        fn prop_zero_strength_is_original(original in 0u8..=255, processed in -1e6f64..1e6) {
            prop_assert_eq!(blend(original as f64, processed, 0.0), original);
        }

        /// Property: blending stays in range for any finite inputs.
        #[test]
        fn prop_output_in_range(
            original in -1e6f64..1e6,
            processed in -1e6f64..1e6,
            strength in -10.0f64..10.0,
        ) {
            let v = blend(original, processed, strength);
            let expected = mix(original, processed, strength).clamp(0.0, 255.0).round();
            prop_assert_eq!(v as f64, expected);
        }

        /// Property: with strength in [0, 1] the result lies between the
        /// rounded endpoints.
        #[test]
        fn prop_interpolates_between_endpoints(
            original in 0u8..=255,
            processed in 0u8..=255,
            strength in 0.0f64..=1.0,
        ) {
            let v = blend(original as f64, processed as f64, strength);
            prop_assert!(v >= original.min(processed));
            prop_assert!(v <= original.max(processed));
        }
    }
}
