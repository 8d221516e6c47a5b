use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::charts::{
    Canvas, Figure, anchored, build_chart, draw_dashed_rect, draw_y_categories, font, grid_style,
    no_line,
};
use crate::error::Result;
use crate::model::palette::{HIGHLIGHT, hex};
use crate::model::{FeatureUsefulness, StyleProfile};

pub const BAR_HEIGHT: f64 = 0.8;
pub const X_MIN: f64 = -0.15;
pub const X_MAX: f64 = 6.0;
const LABEL_GAP: f64 = 0.1;
const TITLE: &str = "Most Valuable Feedback Feature (Q13: \"Select only ONE\") (N=10)";

#[derive(Debug, Clone, PartialEq)]
pub struct HBar {
    pub feature: usize,
    /// Row centre; the first feature gets the highest row.
    pub y: f64,
    pub width: f64,
    pub label: Option<String>,
}

pub struct FeatureUsefulnessChart {
    data: FeatureUsefulness,
}

impl FeatureUsefulnessChart {
    pub fn new(data: FeatureUsefulness) -> Self {
        Self { data }
    }

    /// Rows keep input order top to bottom; zero counts get no label.
    pub fn bars(&self) -> Vec<HBar> {
        let n = self.data.features.len();
        self.data
            .counts
            .iter()
            .zip(self.data.percentages)
            .enumerate()
            .map(|(i, (&count, &pct))| HBar {
                feature: i,
                y: (n - 1 - i) as f64,
                width: count as f64,
                label: (count > 0).then(|| format!("n={count} ({pct}%)")),
            })
            .collect()
    }

    /// Index of the highlighted bar; always the first row when any exist.
    pub fn highlighted(&self) -> Option<usize> {
        (!self.data.features.is_empty()).then_some(0)
    }

    /// Dashed outline around the highlighted bar, slightly wider than it.
    pub fn highlight_rect(&self) -> Option<[(f64, f64); 2]> {
        let top = self.highlighted()?;
        let bar = self.bars().into_iter().nth(top)?;
        let half = BAR_HEIGHT / 2.0;
        Some([
            (-0.1, bar.y - half),
            ((bar.width + 0.2).min(X_MAX - 0.05), bar.y + half),
        ])
    }
}

impl Figure for FeatureUsefulnessChart {
    fn index(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "Feature Usefulness"
    }

    fn file_name(&self) -> &'static str {
        "chart3_feature_usefulness.png"
    }

    fn description(&self) -> &'static str {
        "Most valuable features"
    }

    fn check(&self) -> Result<()> {
        self.data.validate()
    }

    fn define_chart(&self, root: &Canvas<'_>, style: &StyleProfile) -> Result<()> {
        let n = self.data.features.len() as f64;

        let mut chart = build_chart(
            root,
            style,
            TITLE,
            X_MIN..X_MAX,
            -0.5..(n - 0.5),
            40.0,
            110.0,
        )?;
        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_labels(X_MAX as usize + 1)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_labels(self.data.features.len() + 1)
            .y_label_formatter(&|_| String::new())
            .x_desc("Number of Participants (N=10)")
            .axis_desc_style(font(style, style.label_pt, true))
            .label_style(font(style, style.base_pt, false))
            .bold_line_style(grid_style(style))
            .light_line_style(no_line())
            .draw()?;

        let bars = self.bars();
        let half = BAR_HEIGHT / 2.0;
        let edge = BLACK.stroke_width(style.px_u32(1.0));
        chart.draw_series(bars.iter().map(|b| {
            let fill = hex(self.data.colors[b.feature]).mix(0.85).filled();
            Rectangle::new([(0.0, b.y - half), (b.width, b.y + half)], fill)
        }))?;
        chart.draw_series(
            bars.iter()
                .map(|b| Rectangle::new([(0.0, b.y - half), (b.width, b.y + half)], edge)),
        )?;

        let label_style = anchored(
            font(style, style.base_pt, true),
            BLACK,
            HPos::Left,
            VPos::Center,
        );
        chart.draw_series(bars.iter().filter_map(|b| {
            b.label
                .clone()
                .map(|text| Text::new(text, (b.width + LABEL_GAP, b.y), label_style.clone()))
        }))?;

        if let Some(corners) = self.highlight_rect() {
            draw_dashed_rect(
                &mut chart,
                corners,
                style.px_u32(4.0),
                hex(HIGHLIGHT).stroke_width(style.px_u32(2.0)),
            )?;
        }

        let rows = bars
            .iter()
            .map(|b| (b.y, self.data.features[b.feature]))
            .collect::<Vec<_>>();
        draw_y_categories(root, &chart, style, &rows, X_MIN)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/feature_usefulness.rs"]
mod tests;
