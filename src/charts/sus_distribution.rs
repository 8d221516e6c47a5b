use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::charts::{
    Canvas, Figure, anchored, build_chart, font, grid_style, italic, legend_swatch, no_line,
};
use crate::error::Result;
use crate::model::datasets::{SUS_ZONES, SusZone};
use crate::model::palette::{BOX_FILL, MEAN_LINE, MEDIAN, hex, rd_yl_gn};
use crate::model::{StyleProfile, SusDistribution};
use crate::report::{BoxStats, box_stats, format_f64_1};

pub const X_RANGE: (f64, f64) = (0.0, 100.0);
pub const Y_RANGE: (f64, f64) = (0.5, 1.5);
pub const JITTER_CENTRE: f64 = 1.0;
pub const JITTER_SD: f64 = 0.04;
const BOX_HALF_HEIGHT: f64 = 0.25;
const CAP_HALF_HEIGHT: f64 = 0.125;
const ZONE_LABEL_Y: f64 = 1.4;

#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub participant: &'static str,
    pub score: f64,
    pub y: f64,
    pub color: RGBColor,
}

pub struct SusDistributionChart {
    data: SusDistribution,
    points: Vec<ScatterPoint>,
}

/// Vertical offsets drawn from Normal(`JITTER_CENTRE`, `JITTER_SD`).
pub fn jitter<R: Rng>(rng: &mut R, n: usize) -> Result<Vec<f64>> {
    let normal = Normal::new(JITTER_CENTRE, JITTER_SD)?;
    Ok(normal.sample_iter(rng).take(n).collect())
}

impl SusDistributionChart {
    /// Jitter is drawn once here, so every render of this value is identical.
    pub fn new<R: Rng>(data: SusDistribution, rng: &mut R) -> Result<Self> {
        let ys = jitter(rng, data.scores.len())?;
        let points = data
            .participants
            .iter()
            .zip(data.scores)
            .zip(ys)
            .map(|((&participant, &score), y)| ScatterPoint {
                participant,
                score,
                y,
                color: rd_yl_gn(score, X_RANGE.0, X_RANGE.1),
            })
            .collect();
        Ok(Self { data, points })
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn summary(&self) -> BoxStats {
        box_stats(self.data.scores)
    }

    pub fn zones(&self) -> &'static [SusZone] {
        &SUS_ZONES
    }

    pub fn title(&self) -> String {
        format!(
            "System Usability Scale (SUS) Distribution (N={}, Mean={}, SD={})",
            self.data.scores.len(),
            format_f64_1(self.data.mean),
            format_f64_1(self.data.std_dev)
        )
    }

    pub fn mean_label(&self) -> String {
        format!("Mocksy Mean ({})", format_f64_1(self.data.mean))
    }
}

impl Figure for SusDistributionChart {
    fn index(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "SUS Score Distribution"
    }

    fn file_name(&self) -> &'static str {
        "chart4_sus_distribution.png"
    }

    fn description(&self) -> &'static str {
        "SUS score distribution"
    }

    fn check(&self) -> Result<()> {
        self.data.validate()
    }

    fn define_chart(&self, root: &Canvas<'_>, style: &StyleProfile) -> Result<()> {
        let (x0, x1) = X_RANGE;
        let (y0, y1) = Y_RANGE;

        let title = self.title();
        let mut chart = build_chart(root, style, &title, x0..x1, y0..y1, 40.0, 8.0)?;
        chart
            .configure_mesh()
            .disable_y_mesh()
            .disable_y_axis()
            .x_labels(11)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .x_desc("SUS Score (0-100)")
            .axis_desc_style(font(style, style.label_pt, true))
            .label_style(font(style, style.base_pt, false))
            .bold_line_style(grid_style(style))
            .light_line_style(no_line())
            .draw()?;

        for zone in self.zones() {
            let fill = hex(zone.fill).mix(0.1).filled();
            let band = Rectangle::new([(zone.from, y0), (zone.to, y1)], fill);
            let anno = chart.draw_series(std::iter::once(band))?;
            // Only the lowest band goes into the legend.
            if zone.from == x0 {
                anno.label(zone.label)
                    .legend(move |anchor| Rectangle::new(legend_swatch(anchor), fill));
            }
        }
        let zone_style = italic(style, style.tick_pt);
        chart.draw_series(self.zones().iter().map(|z| {
            Text::new(
                z.label,
                ((z.from + z.to) / 2.0, ZONE_LABEL_Y),
                anchored(zone_style.clone(), hex(z.text), HPos::Center, VPos::Center),
            )
        }))?;

        let stats = self.summary();
        let line = BLACK.stroke_width(style.px_u32(1.5));
        let (lo, hi) = (JITTER_CENTRE - BOX_HALF_HEIGHT, JITTER_CENTRE + BOX_HALF_HEIGHT);
        let (cap_lo, cap_hi) = (JITTER_CENTRE - CAP_HALF_HEIGHT, JITTER_CENTRE + CAP_HALF_HEIGHT);
        chart.draw_series(std::iter::once(Rectangle::new(
            [(stats.q1, lo), (stats.q3, hi)],
            hex(BOX_FILL).mix(0.6).filled(),
        )))?;
        chart.draw_series([
            PathElement::new(
                vec![
                    (stats.q1, lo),
                    (stats.q3, lo),
                    (stats.q3, hi),
                    (stats.q1, hi),
                    (stats.q1, lo),
                ],
                line,
            ),
            PathElement::new(
                vec![(stats.whisker_lo, JITTER_CENTRE), (stats.q1, JITTER_CENTRE)],
                line,
            ),
            PathElement::new(
                vec![(stats.q3, JITTER_CENTRE), (stats.whisker_hi, JITTER_CENTRE)],
                line,
            ),
            PathElement::new(
                vec![(stats.whisker_lo, cap_lo), (stats.whisker_lo, cap_hi)],
                line,
            ),
            PathElement::new(
                vec![(stats.whisker_hi, cap_lo), (stats.whisker_hi, cap_hi)],
                line,
            ),
            PathElement::new(
                vec![(stats.median, lo), (stats.median, hi)],
                hex(MEDIAN).stroke_width(style.px_u32(2.0)),
            ),
        ])?;
        let flier = BLACK.stroke_width(1);
        chart.draw_series(
            stats
                .fliers
                .iter()
                .map(|&f| Circle::new((f, JITTER_CENTRE), style.px_u32(3.0), flier)),
        )?;

        let mean_color = hex(MEAN_LINE);
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(self.data.mean, y0), (self.data.mean, y1)],
                mean_color.mix(0.7).stroke_width(style.px_u32(2.0)),
            )))?
            .label(self.mean_label())
            .legend(move |(x, y)| {
                let [(x0, _), (x1, _)] = legend_swatch((x, y));
                PathElement::new(vec![(x0, y), (x1, y)], mean_color.mix(0.7).stroke_width(4))
            });

        let radius = style.px_u32(5.0);
        let outline = BLACK.stroke_width(style.px_u32(1.5));
        let label_style = anchored(
            font(style, style.note_pt, true),
            BLACK,
            HPos::Center,
            VPos::Bottom,
        );
        let lift = -(radius as i32) - style.px(3.0).round() as i32;
        chart.draw_series(self.points().iter().map(|p| {
            EmptyElement::at((p.score, p.y))
                + Circle::new((0, 0), radius, p.color.mix(0.7).filled())
                + Circle::new((0, 0), radius, outline)
                + Text::new(p.participant, (0, lift), label_style.clone())
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.9))
            .border_style(&BLACK)
            .label_font(font(style, style.tick_pt, false))
            .draw()?;

        tracing::debug!(
            median = stats.median,
            q1 = stats.q1,
            q3 = stats.q3,
            "SUS box summary"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/sus_distribution.rs"]
mod tests;
