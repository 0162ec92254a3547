//! Colours shared by the charts and the PDF report

use plotters::style::RGBColor;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0-1.0, as PDF colour operators expect
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.r, c.g, c.b)
    }
}

/// Inbound bar of the summary chart
pub const INBOUND: Rgb = Rgb::new(0xF4, 0x8F, 0xB1);
/// Outbound bar of the summary chart and the individual expense bars
pub const OUTBOUND: Rgb = Rgb::new(0xF0, 0x62, 0x92);
/// Donut wedges, cycled
pub const CATEGORY_PALETTE: [Rgb; 4] = [
    Rgb::new(0xF8, 0xBB, 0xD0),
    Rgb::new(0xF4, 0x8F, 0xB1),
    Rgb::new(0xF0, 0x62, 0x92),
    Rgb::new(0xEC, 0x40, 0x7A),
];
/// Axis lines and guides
pub const AXIS: Rgb = Rgb::new(0x9E, 0x9E, 0x9E);
pub const GUIDE: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);

/// Table grid of the PDF report
pub const TABLE_GRID: Rgb = Rgb::new(0xFF, 0xC0, 0xCB);
/// Header row background of the PDF report tables
pub const TABLE_HEADER: Rgb = Rgb::new(0xFF, 0xB6, 0xC1);
/// Outbound amounts in the PDF detail table
pub const NEGATIVE: Rgb = Rgb::new(0xC6, 0x28, 0x28);
/// Inbound amounts in the PDF detail table
pub const POSITIVE: Rgb = Rgb::new(0x2E, 0x7D, 0x32);
pub const TEXT: Rgb = Rgb::new(0x21, 0x21, 0x21);

/// Wedge colour for the category at `index`
pub fn category_color(index: usize) -> Rgb {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}
