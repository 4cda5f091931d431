/// A range of ray parameters between `min` and `max`.
///
/// Primitives accept a hit only when its `t` lies strictly inside the range
/// (`surrounds`); `contains` is the closed test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Nothing fits: `min` is above `max`.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// The whole line, negative parameters included.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Everything in front of a ray origin.
    pub const POSITIVE: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Pin `x` to the nearest bound when it falls outside.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, new upper bound. The nearest-hit scan narrows its
    /// search with this each time a closer surface turns up.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval { min: self.min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_belong_to_contains_only() {
        let range = Interval::new(1.0, 4.0);

        for bound in [1.0, 4.0] {
            assert!(range.contains(bound));
            assert!(!range.surrounds(bound));
        }
        assert!(range.contains(2.5) && range.surrounds(2.5));
        assert!(!range.contains(0.99) && !range.surrounds(4.01));
    }

    #[test]
    fn test_clamp_pins_to_bounds() {
        let unit = Interval::new(0.0, 1.0);

        assert_eq!(unit.clamp(-3.0), 0.0);
        assert_eq!(unit.clamp(0.25), 0.25);
        assert_eq!(unit.clamp(7.0), 1.0);
    }

    #[test]
    fn test_with_max_keeps_min() {
        let narrowed = Interval::POSITIVE.with_max(4.0);

        assert_eq!(narrowed, Interval::new(0.0, 4.0));
        assert!(narrowed.surrounds(3.99));
        assert!(!narrowed.surrounds(4.0));
    }

    #[test]
    fn test_named_ranges() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.surrounds(-1e10) && Interval::UNIVERSE.surrounds(1e10));

        // A hit exactly at the ray origin is rejected
        assert!(!Interval::POSITIVE.surrounds(0.0));
        assert!(Interval::POSITIVE.surrounds(1e-6));
    }
}
