use crate::config::{PARALLAX_RANGE, PARALLAX_TRAVEL};

/// Maps a scroll offset clamped to `[0, range]` onto `[0, travel]`.
///
/// Offsets past `range` hold at `travel`, so the layer stops instead of
/// overshooting.
pub fn compute_offset(offset_y: f64, range: f64, travel: f64) -> f64 {
    if range <= 0.0 {
        return if offset_y > 0.0 { travel } else { 0.0 };
    }
    let progress = offset_y.clamp(0.0, range) / range;
    progress * travel
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxMapper {
    pub range: f64,
    pub travel: f64,
}

impl Default for ParallaxMapper {
    fn default() -> Self {
        Self {
            range: PARALLAX_RANGE,
            travel: PARALLAX_TRAVEL,
        }
    }
}

impl ParallaxMapper {
    pub fn offset(&self, offset_y: f64) -> f64 {
        compute_offset(offset_y, self.range, self.travel)
    }

    /// CSS transform for the background layer at `offset_y`.
    pub fn transform(&self, offset_y: f64) -> String {
        format!("transform: translate3d(0, {:.1}px, 0);", self.offset(offset_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(compute_offset(0.0, 500.0, 200.0), 0.0);
    }

    #[test]
    fn linear_inside_range() {
        assert_eq!(compute_offset(250.0, 500.0, 200.0), 100.0);
        assert_eq!(compute_offset(125.0, 500.0, 200.0), 50.0);
        assert_eq!(compute_offset(500.0, 500.0, 200.0), 200.0);
    }

    #[test]
    fn clamps_above_range() {
        for offset in [501.0, 900.0, 10_000.0] {
            assert_eq!(compute_offset(offset, 500.0, 200.0), 200.0);
        }
    }

    #[test]
    fn negative_offsets_read_as_top() {
        assert_eq!(compute_offset(-40.0, 500.0, 200.0), 0.0);
    }

    #[test]
    fn zero_range_does_not_divide() {
        assert_eq!(compute_offset(10.0, 0.0, 200.0), 200.0);
        assert_eq!(compute_offset(0.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn transform_uses_default_constants() {
        let mapper = ParallaxMapper::default();
        assert_eq!(mapper.transform(250.0), "transform: translate3d(0, 100.0px, 0);");
    }
}
