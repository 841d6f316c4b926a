//! Fixed chart theme: light grey canvas, soft grid, viridis bars.

use plotters::style::RGBColor;

pub const FONT: &str = "sans-serif";
pub const BACKGROUND: RGBColor = RGBColor(240, 240, 240);
pub const GRID: RGBColor = RGBColor(203, 203, 203);
pub const TEXT: RGBColor = RGBColor(60, 60, 60);

/// Six evenly spaced samples of the viridis colormap.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(72, 33, 115),
    RGBColor(59, 82, 139),
    RGBColor(44, 114, 142),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(194, 223, 35),
];
