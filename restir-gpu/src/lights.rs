use crate::{Light, LightId};

/// Read-only view over the light catalog, together with the discrete
/// distribution lights are importance-sampled from.
#[derive(Clone, Copy, Debug)]
pub struct LightsView<'a> {
    items: &'a [Light],
    probabilities: &'a [f32],
    cdf: &'a [f32],
}

impl<'a> LightsView<'a> {
    /// Creates a view; `probabilities` must sum to one and `cdf` must be its
    /// inclusive prefix-sum.
    pub fn new(
        items: &'a [Light],
        probabilities: &'a [f32],
        cdf: &'a [f32],
    ) -> Self {
        debug_assert_eq!(items.len(), probabilities.len());
        debug_assert_eq!(items.len(), cdf.len());

        Self {
            items,
            probabilities,
            cdf,
        }
    }

    pub fn get(&self, id: LightId) -> Light {
        self.items[id.get() as usize]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns probability of picking given light through [`Self::sample()`].
    pub fn pdf(&self, id: LightId) -> f32 {
        self.probabilities[id.get() as usize]
    }

    /// Picks a light proportionally to its probability, using `u` from
    /// `<0.0, 1.0)`; returns the light and its probability.
    ///
    /// Lights with zero probability are never picked.
    pub fn sample(&self, u: f32) -> (LightId, f32) {
        let idx = self
            .cdf
            .partition_point(|&c| c <= u)
            .min(self.items.len() - 1);

        let id = LightId::new(idx as u32);

        (id, self.pdf(id))
    }
}
