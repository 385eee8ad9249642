mod di;

pub use self::di::*;

use crate::WhiteNoise;

/// Weighted reservoir holding a single sample out of a stream of candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reservoir<T> {
    pub sample: T,

    /// Sum of weights of all candidates seen so far
    pub w_sum: f32,

    /// Number of candidates seen so far
    pub m: u32,

    /// Unbiased contribution weight of `sample`; meaningful only after
    /// [`Self::normalize()`]
    pub w: f32,
}

impl<T> Reservoir<T>
where
    T: Clone + Copy + Default,
{
    /// Streams another candidate through the reservoir, replacing the current
    /// sample with probability `weight / w_sum`.
    ///
    /// Returns whether the sample got replaced.
    pub fn update(
        &mut self,
        wnoise: &mut WhiteNoise,
        sample: T,
        weight: f32,
    ) -> bool {
        self.m += 1;

        if weight <= 0.0 || !weight.is_finite() {
            return false;
        }

        self.w_sum += weight;

        if wnoise.sample() * self.w_sum < weight {
            self.sample = sample;
            true
        } else {
            false
        }
    }

    /// Combines `rhs` into this reservoir as if it was `rhs.m` separate
    /// candidates; `target` is the target function of `rhs.sample` evaluated
    /// at this reservoir's surface.
    ///
    /// Returns whether the sample got replaced.
    pub fn merge(
        &mut self,
        wnoise: &mut WhiteNoise,
        rhs: &Self,
        target: f32,
    ) -> bool {
        if rhs.is_empty() {
            return false;
        }

        self.m += rhs.m - 1;
        self.update(wnoise, rhs.sample, target * rhs.w * (rhs.m as f32))
    }

    /// Computes the final weight, given the target function of the chosen
    /// sample; a reservoir that has not collected any weight becomes empty.
    pub fn normalize(&mut self, target: f32) {
        let denom = (self.m as f32) * target;

        if self.w_sum > 0.0 && denom > 0.0 {
            self.w = self.w_sum / denom;
        } else {
            *self = Self::default();
        }
    }

    pub fn clamp_m(&mut self, max: u32) {
        self.m = self.m.min(max);
    }

    pub fn is_empty(&self) -> bool {
        self.m == 0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::uvec2;

    use super::*;

    const TRIALS: u32 = 40_000;

    fn histogram<const N: usize>(
        mut trial: impl FnMut(&mut WhiteNoise) -> usize,
    ) -> [f32; N] {
        let mut counts = [0u32; N];

        for seed in 0..TRIALS {
            let mut wnoise = WhiteNoise::new(seed, uvec2(1, 2));

            counts[trial(&mut wnoise)] += 1;
        }

        counts.map(|count| (count as f32) / (TRIALS as f32))
    }

    #[test]
    fn update_picks_proportionally_to_weight() {
        let weights = [1.0, 0.0, 2.0, 3.0, 4.0];

        let actual = histogram::<5>(|wnoise| {
            let mut target = Reservoir::default();

            for (idx, weight) in weights.iter().enumerate() {
                target.update(wnoise, idx, *weight);
            }

            assert_eq!(5, target.m);
            assert_relative_eq!(target.w_sum, 10.0);

            target.sample
        });

        for (actual, weight) in actual.iter().zip(weights) {
            assert_relative_eq!(*actual, weight / 10.0, epsilon = 0.01);
        }
    }

    #[test]
    fn weightless_reservoir_becomes_empty() {
        let mut wnoise = WhiteNoise::new(0, uvec2(0, 0));
        let mut target = Reservoir::<u32>::default();

        for sample in 0..8 {
            target.update(&mut wnoise, sample, 0.0);
        }

        assert_eq!(8, target.m);

        target.normalize(1.0);

        assert!(target.is_empty());
        assert_eq!(0.0, target.w_sum);
        assert_eq!(0.0, target.w);
    }

    #[test]
    fn normalize() {
        let mut wnoise = WhiteNoise::new(0, uvec2(0, 0));
        let mut target = Reservoir::default();

        target.update(&mut wnoise, 1u32, 2.0);
        target.update(&mut wnoise, 2u32, 0.0);
        target.normalize(4.0);

        assert_eq!(1, target.sample);
        assert_relative_eq!(target.w, 2.0 / (2.0 * 4.0));
    }

    #[test]
    fn merge_skips_empty_reservoirs() {
        let mut wnoise = WhiteNoise::new(0, uvec2(0, 0));
        let mut target = Reservoir::<u32>::default();

        assert!(!target.merge(&mut wnoise, &Reservoir::default(), 1.0));
        assert!(target.is_empty());
    }

    #[test]
    fn merge_is_order_independent_in_expectation() {
        // Sample `0` carries weight 3.0, sample `1` carries weight 1.0
        let a = Reservoir {
            sample: 0usize,
            w_sum: 3.0,
            m: 3,
            w: 1.0,
        };

        let b = Reservoir {
            sample: 1usize,
            w_sum: 2.0,
            m: 1,
            w: 0.5,
        };

        let targets = [1.0, 2.0];

        let merge = |order: [&Reservoir<usize>; 2], wnoise: &mut WhiteNoise| {
            let mut target = Reservoir::default();

            for rhs in order {
                target.merge(wnoise, rhs, targets[rhs.sample]);
            }

            assert_eq!(4, target.m);
            assert_relative_eq!(target.w_sum, 4.0);

            target.sample
        };

        let ab = histogram::<2>(|wnoise| merge([&a, &b], wnoise));
        let ba = histogram::<2>(|wnoise| merge([&b, &a], wnoise));

        assert_relative_eq!(ab[0], 0.75, epsilon = 0.01);
        assert_relative_eq!(ba[0], 0.75, epsilon = 0.01);
    }
}
