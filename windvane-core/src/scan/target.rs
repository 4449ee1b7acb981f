//! Alignment target arithmetic

/// Steps to drive back from the far edge to the peak
///
/// `step_count - peak_position + release_margin + calibration_margin`.
/// The sweep ends `release_margin` steps short of the far edge, so the
/// release distance is added back; the calibration margin absorbs the
/// offset between the homing edge and where the sweep really starts.
/// Saturates instead of wrapping.
pub fn alignment_target(
    step_count: i32,
    peak_position: i32,
    release_margin: u16,
    calibration_margin: i16,
) -> i32 {
    step_count
        .saturating_sub(peak_position)
        .saturating_add(i32::from(release_margin))
        .saturating_add(i32::from(calibration_margin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(alignment_target(500, 120, 400, 300), 1080);
        assert_eq!(alignment_target(1000, 300, 400, 300), 1400);
    }

    #[test]
    fn test_negative_calibration() {
        assert_eq!(alignment_target(10, 9, 1, -5), -3);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(alignment_target(i32::MAX, -1, 1, 1), i32::MAX);
    }

    proptest! {
        #[test]
        fn prop_matches_formula(
            s in 0i32..100_000,
            p in 0i32..100_000,
            r in any::<u16>(),
            c in any::<i16>(),
        ) {
            let expected = s - p + r as i32 + c as i32;
            prop_assert_eq!(alignment_target(s, p, r, c), expected);
        }
    }
}
