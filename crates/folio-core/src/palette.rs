//! Display colors for chart surfaces.

use rand::Rng;
use serde::Serialize;

/// An RGB color with alpha, mirroring CSS `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS `rgba(r, g, b, a)` rendering for JSON consumers.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Accent gold: donut's first slice and the line stroke.
pub const ACCENT: Rgba = Rgba::opaque(0xC0, 0xA5, 0x4B);
/// Ink grey: donut's second slice and axis ticks.
pub const INK: Rgba = Rgba::opaque(0x36, 0x38, 0x38);
/// Translucent fill under the line chart.
pub const ACCENT_FILL: Rgba = Rgba {
    r: 0xC0,
    g: 0xA5,
    b: 0x4B,
    a: 0.2,
};
/// Fixed donut palette: the first label gets the first color.
pub const DONUT: [Rgba; 2] = [ACCENT, INK];

/// Exclusive upper bound for generated color channels.
const CHANNEL_CEILING: u8 = 200;
/// Alpha applied to every generated color.
const CHART_ALPHA: f32 = 0.7;

/// Sample `n` independent random colors.
///
/// Each channel is drawn uniformly from `0..200` with alpha fixed at 0.7.
/// No uniqueness or contrast guarantee — purely decorative. `n == 0` yields
/// an empty vec.
#[must_use]
pub fn generate_colors(n: usize) -> Vec<Rgba> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Rgba {
            r: rng.gen_range(0..CHANNEL_CEILING),
            g: rng.gen_range(0..CHANNEL_CEILING),
            b: rng.gen_range(0..CHANNEL_CEILING),
            a: CHART_ALPHA,
        })
        .collect()
}
