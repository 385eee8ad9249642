use log::{debug, info};

use crate::gpu::Vec3Ext;
use crate::{gpu, Error, Light, Result};

/// Light catalog: all lights of a scene, together with the discrete
/// distribution they are importance-sampled from.
///
/// Each light is picked with probability proportional to the luma of its
/// color; catalog is immutable once built.
#[derive(Clone, Debug)]
pub struct Lights {
    items: Vec<gpu::Light>,
    probabilities: Vec<f32>,
    cdf: Vec<f32>,
}

impl Lights {
    pub fn build(lights: impl IntoIterator<Item = Light>) -> Result<Self> {
        let items: Vec<_> =
            lights.into_iter().map(|light| light.serialize()).collect();

        if items.is_empty() {
            return Err(Error::NoLights);
        }

        let weights: Vec<_> = items
            .iter()
            .map(|light| light.color().luma().max(0.0))
            .collect();

        let total: f32 = weights.iter().sum();

        if total <= 0.0 || !total.is_finite() {
            return Err(Error::ZeroLightWeight { total });
        }

        let probabilities: Vec<_> =
            weights.iter().map(|weight| weight / total).collect();

        let mut cdf = Vec::with_capacity(probabilities.len());
        let mut acc = 0.0;

        for probability in &probabilities {
            acc += probability;
            cdf.push(acc);
        }

        // Rounding errors could otherwise leave a gap at the very end; it gets
        // closed by the last light that can actually be picked
        if let Some(last) = probabilities.iter().rposition(|&p| p > 0.0) {
            cdf[last..].fill(1.0);
        }

        info!("Light catalog built: {} light(s)", items.len());
        debug!("Light catalog total weight: {total}");

        Ok(Self {
            items,
            probabilities,
            cdf,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: gpu::LightId) -> Option<&gpu::Light> {
        self.items.get(id.get() as usize)
    }

    pub fn probabilities(&self) -> &[f32] {
        &self.probabilities
    }

    /// Picks a light using `u` from `<0.0, 1.0)`; returns the light and the
    /// probability of picking it.
    pub fn sample(&self, u: f32) -> (gpu::LightId, f32) {
        self.view().sample(u)
    }

    pub fn view(&self) -> gpu::LightsView<'_> {
        gpu::LightsView::new(&self.items, &self.probabilities, &self.cdf)
    }
}
