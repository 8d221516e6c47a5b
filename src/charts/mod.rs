pub mod feature_usefulness;
pub mod learning_gains;
pub mod sus_distribution;
pub mod trust_gap;

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Instant;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::Result;
use crate::model::StyleProfile;

pub use feature_usefulness::FeatureUsefulnessChart;
pub use learning_gains::LearningGainsChart;
pub use sus_distribution::SusDistributionChart;
pub use trust_gap::TrustGapChart;

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
pub type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// One PNG figure with a fixed file name.
pub trait Figure {
    fn index(&self) -> usize;

    /// Progress name printed before rendering.
    fn name(&self) -> &'static str;

    fn file_name(&self) -> &'static str;

    /// One-line description used in the summary listing.
    fn description(&self) -> &'static str;

    /// Rejects malformed literal data before any file is opened.
    fn check(&self) -> Result<()>;

    fn define_chart(&self, root: &Canvas<'_>, style: &StyleProfile) -> Result<()>;

    fn draw(&self, out_dir: &Path, style: &StyleProfile) -> Result<PathBuf> {
        self.check()?;
        let path = out_dir.join(self.file_name());
        let size = style.pixel_size();
        let started = Instant::now();
        {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            root.fill(&WHITE)?;
            self.define_chart(&root, style)?;
            root.present()?;
        }
        tracing::info!(
            chart = self.index(),
            file = %path.display(),
            width = size.0,
            height = size.1,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "figure written"
        );
        Ok(path)
    }
}

pub fn font(style: &StyleProfile, pt: f64, bold: bool) -> FontDesc<'static> {
    let weight = if bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    FontDesc::new(FontFamily::from(style.font_family), style.px(pt), weight)
}

pub fn italic(style: &StyleProfile, pt: f64) -> FontDesc<'static> {
    FontDesc::new(
        FontFamily::from(style.font_family),
        style.px(pt),
        FontStyle::Italic,
    )
}

pub fn anchored(f: FontDesc<'static>, color: RGBColor, h: HPos, v: VPos) -> TextStyle<'static> {
    f.color(&color).pos(Pos::new(h, v))
}

/// Builds a captioned f64 x f64 chart. Label area sizes are in points.
pub fn build_chart<'a, 'b>(
    root: &'a Canvas<'b>,
    style: &StyleProfile,
    caption: &str,
    x: Range<f64>,
    y: Range<f64>,
    x_area_pt: f64,
    y_area_pt: f64,
) -> Result<Chart2d<'a, 'b>> {
    let chart = ChartBuilder::on(root)
        .caption(caption, font(style, style.title_pt, true))
        .margin(style.px_u32(style.margin_pt))
        .x_label_area_size(style.px_u32(x_area_pt))
        .y_label_area_size(style.px_u32(y_area_pt))
        .build_cartesian_2d(x, y)?;
    Ok(chart)
}

/// Legend swatch corners for a legend entry anchored at `(x, y)`. Kept
/// inside the gap plotters leaves before the label text.
pub fn legend_swatch((x, y): (i32, i32)) -> [(i32, i32); 2] {
    [(x, y - 6), (x + 12, y + 6)]
}

pub fn grid_style(style: &StyleProfile) -> ShapeStyle {
    BLACK.mix(style.grid_alpha * 0.5).stroke_width(1)
}

pub fn no_line() -> ShapeStyle {
    WHITE.mix(0.0).stroke_width(0)
}

/// Draws multi-line category labels centred under each x position.
pub fn draw_x_categories(
    root: &Canvas<'_>,
    chart: &Chart2d<'_, '_>,
    style: &StyleProfile,
    labels: &[&str],
    y_axis: f64,
) -> Result<()> {
    let line_px = (style.px(style.tick_pt) * 1.2).round() as i32;
    let pad = style.px(4.0).round() as i32;
    let text = anchored(font(style, style.tick_pt, false), BLACK, HPos::Center, VPos::Top);
    for (i, label) in labels.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(i as f64, y_axis));
        for (line_no, line) in label.lines().enumerate() {
            root.draw(&Text::new(
                line.to_string(),
                (px, py + pad + line_no as i32 * line_px),
                text.clone(),
            ))?;
        }
    }
    Ok(())
}

/// Draws multi-line category labels right-aligned left of each y position.
pub fn draw_y_categories(
    root: &Canvas<'_>,
    chart: &Chart2d<'_, '_>,
    style: &StyleProfile,
    labels: &[(f64, &str)],
    x_axis: f64,
) -> Result<()> {
    let line_px = (style.px(style.base_pt) * 1.2).round() as i32;
    let pad = style.px(4.0).round() as i32;
    let text = anchored(
        font(style, style.base_pt, false),
        BLACK,
        HPos::Right,
        VPos::Center,
    );
    for &(y, label) in labels {
        let (px, py) = chart.backend_coord(&(x_axis, y));
        let lines = label.lines().collect::<Vec<_>>();
        let top = py - (lines.len() as i32 - 1) * line_px / 2;
        for (line_no, line) in lines.iter().enumerate() {
            root.draw(&Text::new(
                line.to_string(),
                (px - pad, top + line_no as i32 * line_px),
                text.clone(),
            ))?;
        }
    }
    Ok(())
}

/// Horizontal centres, in pixels from the left edge of the y label area, of
/// each line of a rotated axis title. Lines stack left to right.
pub fn y_title_offsets(style: &StyleProfile, lines: usize) -> Vec<i32> {
    let line_px = style.px(style.label_pt) * 1.25;
    let pad = style.px(4.0);
    (0..lines)
        .map(|i| (pad + line_px * (i as f64 + 0.5)).round() as i32)
        .collect()
}

/// Draws a multi-line y axis title rotated along the left label area,
/// centred on the plotting area's height.
pub fn draw_y_title(
    root: &Canvas<'_>,
    chart: &Chart2d<'_, '_>,
    style: &StyleProfile,
    title: &str,
    area_pt: f64,
) -> Result<()> {
    let (xs, ys) = chart.plotting_area().get_pixel_range();
    let area_left = xs.start - style.px_u32(area_pt) as i32;
    let mid = (ys.start + ys.end) / 2;
    let text = anchored(
        font(style, style.label_pt, true).transform(FontTransform::Rotate270),
        BLACK,
        HPos::Center,
        VPos::Center,
    );
    let lines = title.lines().collect::<Vec<_>>();
    for (line, dx) in lines.iter().zip(y_title_offsets(style, lines.len())) {
        root.draw(&Text::new(line.to_string(), (area_left + dx, mid), text.clone()))?;
    }
    Ok(())
}

/// Horizontal reference line across the chart at `y`.
pub fn draw_hline(
    chart: &mut Chart2d<'_, '_>,
    style: &StyleProfile,
    x: Range<f64>,
    y: f64,
) -> Result<()> {
    let dash = style.px_u32(1.0);
    let line = RGBColor(128, 128, 128)
        .mix(0.5)
        .stroke_width(style.px_u32(1.0));
    chart.draw_series(DashedLineSeries::new(
        vec![(x.start, y), (x.end, y)],
        dash,
        dash * 2,
        line,
    ))?;
    Ok(())
}

pub fn draw_dashed_rect(
    chart: &mut Chart2d<'_, '_>,
    corners: [(f64, f64); 2],
    dash: u32,
    line: ShapeStyle,
) -> Result<()> {
    let [(x0, y0), (x1, y1)] = corners;
    chart.draw_series(DashedLineSeries::new(
        vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)],
        dash,
        dash / 2,
        line,
    ))?;
    Ok(())
}

/// Triangle for an arrow head pointing at `tip`, coming from `tail`.
pub fn arrow_head(tip: (i32, i32), tail: (i32, i32), len: f64) -> Vec<(i32, i32)> {
    let dx = (tip.0 - tail.0) as f64;
    let dy = (tip.1 - tail.1) as f64;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return vec![tip, tip, tip];
    }
    let (ux, uy) = (dx / norm, dy / norm);
    let half = len * 0.45;
    let base = (tip.0 as f64 - ux * len, tip.1 as f64 - uy * len);
    vec![
        tip,
        (
            (base.0 - uy * half).round() as i32,
            (base.1 + ux * half).round() as i32,
        ),
        (
            (base.0 + uy * half).round() as i32,
            (base.1 - ux * half).round() as i32,
        ),
    ]
}

/// Double-headed arrow between two backend points.
pub fn draw_double_arrow(
    root: &Canvas<'_>,
    from: (i32, i32),
    to: (i32, i32),
    head_len: f64,
    line: ShapeStyle,
) -> Result<()> {
    root.draw(&PathElement::new(vec![from, to], line))?;
    root.draw(&Polygon::new(arrow_head(from, to, head_len), line.filled()))?;
    root.draw(&Polygon::new(arrow_head(to, from, head_len), line.filled()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/mod.rs"]
mod tests;
