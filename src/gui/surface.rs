//! Host drawing surface
//!
//! The host application owns the actual graphics pipeline. Tiles and
//! ingredient renderers only talk to it through [`RenderSurface`].

/// ARGB color, packed the way the host's immediate-mode calls expect it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const GRAY: Color = Color(0xFFAA_AAAA);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const AQUA: Color = Color(0xFF55_FFFF);
    pub const LIGHT_PURPLE: Color = Color(0xFFFF_55FF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Screen-space rectangle in GUI pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two corners, the way `drawRect`-style calls take them
    pub const fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// Immediate-mode drawing calls supplied by the host
pub trait RenderSurface {
    fn fill_rect(&mut self, area: Rect, color: Color);

    /// Draw a single line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, italic: bool);

    /// Width of `text` in GUI pixels with the current font
    fn text_width(&self, text: &str) -> i32;

    fn line_height(&self) -> i32 {
        10
    }

    fn set_depth_test(&mut self, _enabled: bool) {}
}
