use super::viridis_table::VIRIDIS;
use crate::model::TerritoryError;
use colorgrad::{Color, Gradient, GradientBuilder, LinearGradient};

/// continuous color scale sampled on `[0, 1]`
pub trait ColorMap: Sync {
    /// rgb channels for position `t`, each channel truncated (not rounded) to u8
    fn rgb(&self, t: f64) -> [u8; 3];
}

/// a `ColorMap` backed by a colorgrad gradient of `levels` evenly spaced stops. `t`
/// is snapped to one of `levels` equally sized bins and the bin's stop color is
/// returned without blending, the way a listed colormap is looked up.
pub struct GradientColorMap<G: Gradient + Sync> {
    gradient: G,
    levels: usize,
}

impl<G: Gradient + Sync> GradientColorMap<G> {
    pub fn new(gradient: G, levels: usize) -> GradientColorMap<G> {
        GradientColorMap { gradient, levels }
    }

    fn position(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.levels < 2 {
            return t;
        }
        let bin = ((t * self.levels as f64).floor() as usize).min(self.levels - 1);
        bin as f64 / (self.levels - 1) as f64
    }
}

/// the perceptually uniform blue to yellow scale used for travel times, with the
/// same 256 colors and bin lookup as matplotlib's `viridis`
pub fn viridis() -> Result<GradientColorMap<LinearGradient>, TerritoryError> {
    let colors = VIRIDIS
        .iter()
        .map(|[r, g, b]| Color::new(*r, *g, *b, 1.0))
        .collect::<Vec<_>>();
    let gradient = GradientBuilder::new()
        .colors(&colors)
        .build::<LinearGradient>()
        .map_err(|e| TerritoryError::InternalError(format!("failure building viridis: {e}")))?;
    Ok(GradientColorMap::new(gradient, colors.len()))
}

impl<G: Gradient + Sync> ColorMap for GradientColorMap<G> {
    fn rgb(&self, t: f64) -> [u8; 3] {
        let color = self.gradient.at(self.position(t) as f32);
        [
            channel_to_u8(color.r),
            channel_to_u8(color.g),
            channel_to_u8(color.b),
        ]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
