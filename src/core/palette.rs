use std::fmt;

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// CSS `mix-blend-mode` for the trail layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Screen,
    Multiply,
}

impl BlendMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Screen => "screen",
            BlendMode::Multiply => "multiply",
        }
    }
}

const ARROW_FILL_DARK: Rgba = Rgba::new(0, 0, 0, 0.8);
const ARROW_FILL_LIGHT: Rgba = Rgba::new(255, 255, 255, 0.9);
const OUTLINE: Rgba = Rgba::opaque(0xff, 0x8a, 0x00); // neon orange in both themes
const STROKE_DARK: Rgba = Rgba::opaque(0xff, 0xff, 0xff);
const STROKE_LIGHT: Rgba = Rgba::opaque(0x21, 0x25, 0x29);

/// Theme-dependent colors. Only the `dark` flag varies; everything else is
/// fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Palette {
    pub dark: bool,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn glyph_fill(&self) -> Rgba {
        if self.dark {
            ARROW_FILL_DARK
        } else {
            ARROW_FILL_LIGHT
        }
    }

    pub fn glyph_outline(&self) -> Rgba {
        OUTLINE
    }

    pub fn dot_blend(&self) -> BlendMode {
        if self.dark {
            BlendMode::Screen
        } else {
            BlendMode::Normal
        }
    }

    pub fn stroke_color(&self) -> Rgba {
        if self.dark {
            STROKE_DARK
        } else {
            STROKE_LIGHT
        }
    }

    pub fn stroke_blend(&self) -> BlendMode {
        if self.dark {
            BlendMode::Screen
        } else {
            BlendMode::Multiply
        }
    }
}
