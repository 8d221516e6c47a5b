use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::charts::{
    Canvas, Figure, anchored, build_chart, draw_double_arrow, draw_hline, draw_x_categories,
    draw_y_title, font, grid_style, italic, no_line,
};
use crate::error::Result;
use crate::model::palette::{GAP_ARROW, GAP_BOX, NEUTRAL, hex};
use crate::model::{StyleProfile, TrustGap};

pub const BAR_WIDTH: f64 = 0.8;
pub const Y_MAX: f64 = 5.8;
pub const NEUTRAL_TRUST: f64 = 3.0;
const CAP_HALF_WIDTH: f64 = 0.06;
const VALUE_LIFT: f64 = 0.15;
const GAP_LABEL_Y: f64 = 4.0;
const TITLE: &str = "The Trust Gap: How Voice Interruptions Degrade User Trust (N=10)";
pub const Y_TITLE: &str = "Trust in AI Evaluation\n(1=Don't trust, 5=Completely trust)";
pub const Y_LABEL_AREA_PT: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WhiskerBar {
    pub category: usize,
    pub low: f64,
    pub mean: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapArrow {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub label: (f64, f64),
}

pub struct TrustGapChart {
    data: TrustGap,
}

impl TrustGapChart {
    pub fn new(data: TrustGap) -> Self {
        Self { data }
    }

    /// Error bars only where the deviation is known and non-zero.
    pub fn error_bars(&self) -> Vec<WhiskerBar> {
        self.data
            .means
            .iter()
            .zip(self.data.std_devs)
            .enumerate()
            .filter_map(|(i, (&mean, sd))| match *sd {
                Some(sd) if sd > 0.0 => Some(WhiskerBar {
                    category: i,
                    low: mean - sd,
                    mean,
                    high: mean + sd,
                }),
                _ => None,
            })
            .collect()
    }

    pub fn value_labels(&self) -> Vec<(f64, f64, String)> {
        self.data
            .means
            .iter()
            .enumerate()
            .map(|(i, &m)| (i as f64, m + VALUE_LIFT, format!("{m:.1}")))
            .collect()
    }

    /// Arrow from just above the first mean to just below the second.
    pub fn gap_arrow(&self) -> GapArrow {
        let (a, b) = (self.data.gap_from, self.data.gap_to);
        GapArrow {
            from: (a as f64, self.data.means[a] + 0.3),
            to: (b as f64, self.data.means[b] - 0.2),
            label: ((a + b) as f64 / 2.0, GAP_LABEL_Y),
        }
    }
}

impl Figure for TrustGapChart {
    fn index(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "Trust Gap Analysis"
    }

    fn file_name(&self) -> &'static str {
        "chart2_trust_gap.png"
    }

    fn description(&self) -> &'static str {
        "Trust vs interruption correlation"
    }

    fn check(&self) -> Result<()> {
        self.data.validate()
    }

    fn define_chart(&self, root: &Canvas<'_>, style: &StyleProfile) -> Result<()> {
        let n = self.data.levels.len() as f64;
        let x_range = -0.5..(n - 0.5);

        let mut chart = build_chart(
            root,
            style,
            TITLE,
            x_range.clone(),
            0.0..Y_MAX,
            62.0,
            Y_LABEL_AREA_PT,
        )?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(self.data.levels.len() + 1)
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|v| format!("{v:.1}"))
            .x_desc("Interruption Frequency During Interview")
            .axis_desc_style(font(style, style.label_pt, true))
            .label_style(font(style, style.base_pt, false))
            .bold_line_style(grid_style(style))
            .light_line_style(no_line())
            .draw()?;

        let edge = BLACK.stroke_width(style.px_u32(1.0));
        let half = BAR_WIDTH / 2.0;
        chart.draw_series(self.data.means.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            let fill = hex(self.data.colors[i]).mix(0.85).filled();
            Rectangle::new([(x - half, 0.0), (x + half, m)], fill)
        }))?;
        chart.draw_series(self.data.means.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            Rectangle::new([(x - half, 0.0), (x + half, m)], edge)
        }))?;

        let whisker = BLACK.stroke_width(style.px_u32(2.0));
        for bar in self.error_bars() {
            let x = bar.category as f64;
            let (lo, hi) = (x - CAP_HALF_WIDTH, x + CAP_HALF_WIDTH);
            chart.draw_series([
                PathElement::new(vec![(x, bar.low), (x, bar.high)], whisker),
                PathElement::new(vec![(lo, bar.low), (hi, bar.low)], whisker),
                PathElement::new(vec![(lo, bar.high), (hi, bar.high)], whisker),
            ])?;
        }

        let value_style = anchored(
            font(style, style.label_pt, true),
            BLACK,
            HPos::Center,
            VPos::Bottom,
        );
        chart.draw_series(
            self.value_labels()
                .into_iter()
                .map(|(x, y, text)| Text::new(text, (x, y), value_style.clone())),
        )?;

        let arrow = self.gap_arrow();
        let red = hex(GAP_ARROW);
        draw_double_arrow(
            root,
            chart.backend_coord(&arrow.from),
            chart.backend_coord(&arrow.to),
            style.px(8.0),
            red.stroke_width(style.px_u32(2.0)),
        )?;

        let (lx, ly) = arrow.label;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(lx - 0.32, ly - 0.42), (lx + 0.32, ly + 0.38)],
            hex(GAP_BOX).mix(0.3).filled(),
        )))?;
        let gap_style = anchored(
            font(style, style.base_pt, true),
            red,
            HPos::Center,
            VPos::Center,
        );
        chart.draw_series([
            Text::new("Trust Gap", (lx, ly + 0.16), gap_style.clone()),
            Text::new(self.data.gap_label, (lx, ly - 0.18), gap_style),
        ])?;

        draw_hline(&mut chart, style, x_range, NEUTRAL_TRUST)?;
        chart.draw_series(std::iter::once(Text::new(
            "Neutral Trust",
            (n - 0.55, NEUTRAL_TRUST + 0.1),
            anchored(italic(style, style.note_pt), hex(NEUTRAL), HPos::Right, VPos::Bottom),
        )))?;

        draw_y_title(root, &chart, style, Y_TITLE, Y_LABEL_AREA_PT)?;
        draw_x_categories(root, &chart, style, self.data.levels, 0.0)?;
        for bar in self.error_bars() {
            tracing::debug!(category = bar.category, mean = bar.mean, "trust error bar");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/trust_gap.rs"]
mod tests;
