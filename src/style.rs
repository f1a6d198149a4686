use image::Rgba;

/// Fixed visual style for the TIS icon.
///
/// The palette matches the shipped app colors: a blue vertical gradient
/// background, a white clock face, and a green currency accent. The whole
/// struct is an immutable constant passed explicitly into the renderer.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Gradient start color (top row of the canvas).
    pub background: Rgba<u8>,
    /// Gradient end color (bottom row of the canvas).
    pub background2: Rgba<u8>,
    /// Clock face outline color.
    pub face: Rgba<u8>,
    /// Clock hands and center dot color.
    pub hand: Rgba<u8>,
    /// Accent glyph color.
    pub accent: Rgba<u8>,
    /// Translucent shadow behind the accent glyph.
    pub shadow: Rgba<u8>,
    /// Single character drawn in the lower-right quadrant.
    pub accent_glyph: char,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Rgba([52, 152, 219, 255]),
            background2: Rgba([32, 132, 199, 255]),
            face: Rgba([255, 255, 255, 255]),
            hand: Rgba([255, 255, 255, 255]),
            accent: Rgba([46, 204, 113, 255]),
            shadow: Rgba([0, 0, 0, 128]),
            accent_glyph: '$',
        }
    }
}
