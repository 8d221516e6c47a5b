use plotters::style::RGBColor;

pub fn hex(rgb: u32) -> RGBColor {
    RGBColor((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub const BEFORE: u32 = 0xE74C3C;
pub const AFTER: u32 = 0x27AE60;
pub const ANNOTATION: u32 = 0x2C3E50;
pub const NEUTRAL: u32 = 0x808080;
pub const HIGHLIGHT: u32 = 0x008000;
pub const GAP_ARROW: u32 = 0xFF0000;
pub const GAP_BOX: u32 = 0xFFFF00;
pub const BOX_FILL: u32 = 0xADD8E6;
pub const MEDIAN: u32 = 0xFF0000;
pub const MEAN_LINE: u32 = 0x008000;

// Red-yellow-green diverging anchors, evenly spaced over [0, 1].
const RD_YL_GN: [u32; 11] = [
    0xA50026, 0xD73027, 0xF46D43, 0xFDAE61, 0xFEE08B, 0xFFFFBF, 0xD9EF8B, 0xA6D96A, 0x66BD63,
    0x1A9850, 0x006837,
];

/// Maps `value` in `[vmin, vmax]` onto the red-yellow-green colormap.
/// Values outside the range clamp to the end colors.
pub fn rd_yl_gn(value: f64, vmin: f64, vmax: f64) -> RGBColor {
    let t = if vmax > vmin {
        ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let scaled = t * (RD_YL_GN.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(RD_YL_GN.len() - 1);
    let frac = scaled - lo as f64;
    let a = hex(RD_YL_GN[lo]);
    let b = hex(RD_YL_GN[hi]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
