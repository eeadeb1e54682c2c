//! Float rounding helpers which don't need `std`.

/// Magnitude from which every [`f32`] is a whole number.
const F32_INTEGRAL_THRESHOLD: f32 = 8_388_608.0; // 2^23

/// Rounds towards zero. `value` must be finite.
#[inline]
pub(crate) fn trunc(value: f32) -> f32 {
    if abs(value) >= F32_INTEGRAL_THRESHOLD {
        value
    } else {
        value as i32 as f32
    }
}

/// Rounds towards negative infinity. `value` must be finite.
#[inline]
pub(crate) fn floor(value: f32) -> f32 {
    let truncated = trunc(value);
    if truncated > value {
        truncated - 1.0
    } else {
        truncated
    }
}

#[inline]
pub(crate) fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.25, 1.0, 1.0)]
    #[case(-0.25, 0.0, -1.0)]
    #[case(-1.5, -1.0, -2.0)]
    #[case(-2.0, -2.0, -2.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(16_777_216.0, 16_777_216.0, 16_777_216.0)]
    fn rounds_like_std(#[case] value: f32, #[case] truncated: f32, #[case] floored: f32) {
        assert_eq!(trunc(value), truncated);
        assert_eq!(floor(value), floored);
    }

    #[test]
    fn abs_strips_sign() {
        assert_eq!(abs(-0.25), 0.25);
        assert_eq!(abs(0.25), 0.25);
    }
}
