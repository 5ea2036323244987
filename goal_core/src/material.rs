/// sRGB colour; the renderer linearises it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const LIGHT_GRAY: Color = Color::new(0.827_451, 0.827_451, 0.827_451); // #d3d3d3
    pub const LIGHT_GREEN: Color = Color::new(0.564_706, 0.933_333, 0.564_706); // #90ee90
    pub const FOREST_GREEN: Color = Color::new(0.133_333, 0.545_098, 0.133_333); // #228b22
    pub const CARD_YELLOW: Color = Color::new(1.0, 0.843_137, 0.0);
    pub const CARD_RED: Color = Color::new(0.862_745, 0.078_431, 0.235_294);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Colour from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Surface description attached to every render item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub double_sided: bool,
    /// Lines and paths are drawn without lighting
    pub unlit: bool,
    /// Image path; renderers without texture support draw `color` instead
    pub texture: Option<&'static str>,
}

impl Material {
    /// Lit, opaque, single-sided material
    pub fn phong(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            double_sided: false,
            unlit: false,
            texture: None,
        }
    }

    pub fn line(color: Color) -> Self {
        Self {
            unlit: true,
            ..Self::phong(color)
        }
    }

    pub fn textured(path: &'static str, fallback: Color) -> Self {
        Self {
            texture: Some(path),
            ..Self::phong(fallback)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_matches_named_colors() {
        let gray = Color::from_hex(0xd3d3d3);
        assert!((gray.r - Color::LIGHT_GRAY.r).abs() < 1e-5);
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    }

    #[test]
    fn test_channels_stay_in_srgb() {
        // Mid grey is 128/255 as written, not linearised (~0.216)
        let grey = Color::from_hex(0x808080);
        assert!((grey.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(grey.to_rgba(0.5), [grey.r, grey.g, grey.b, 0.5]);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let material = Material::phong(Color::WHITE).with_opacity(1.7);
        assert_eq!(material.opacity, 1.0);
        assert!(!material.is_transparent());

        let net = Material::phong(Color::LIGHT_GRAY).with_opacity(0.4);
        assert!(net.is_transparent(), "Net at 0.4 opacity should be transparent");
    }

    #[test]
    fn test_textured_keeps_fallback_color() {
        let material = Material::textured("textures/soccer_ball.jpg", Color::WHITE);
        assert_eq!(material.texture, Some("textures/soccer_ball.jpg"));
        assert_eq!(material.color, Color::WHITE);
    }
}
