use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::charts::{
    Canvas, Figure, anchored, build_chart, draw_hline, draw_x_categories, draw_y_title, font,
    grid_style, italic, legend_swatch, no_line,
};
use crate::error::Result;
use crate::model::palette::{AFTER, ANNOTATION, BEFORE, NEUTRAL, hex};
use crate::model::{LearningGains, StyleProfile};

pub const BAR_WIDTH: f64 = 0.35;
pub const Y_MAX: f64 = 5.5;
pub const NEUTRAL_SCORE: f64 = 3.0;
const LABEL_LIFT: f64 = 0.2;
const TITLE: &str = "Learning Impact: STAR Understanding by Experience Level (N=10)";
pub const Y_TITLE: &str =
    "STAR Framework Understanding\n(1=Don't understand, 5=Fully understand)";
pub const Y_LABEL_AREA_PT: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x0: f64,
    pub x1: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GainLabel {
    pub category: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

pub struct LearningGainsChart {
    data: LearningGains,
}

impl LearningGainsChart {
    pub fn new(data: LearningGains) -> Self {
        Self { data }
    }

    /// Before bars sit left of the category centre, after bars right.
    pub fn bars(&self) -> (Vec<Bar>, Vec<Bar>) {
        let place = |values: &[f64], offset: f64| {
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let centre = i as f64 + offset;
                    Bar {
                        x0: centre - BAR_WIDTH / 2.0,
                        x1: centre + BAR_WIDTH / 2.0,
                        height: v,
                    }
                })
                .collect::<Vec<_>>()
        };
        (
            place(self.data.pre_means, -BAR_WIDTH / 2.0),
            place(self.data.post_means, BAR_WIDTH / 2.0),
        )
    }

    /// Only strictly positive gains get a label.
    pub fn gain_labels(&self) -> Vec<GainLabel> {
        self.data
            .gains
            .iter()
            .enumerate()
            .filter(|&(_, &g)| g > 0.0)
            .map(|(i, &g)| GainLabel {
                category: i,
                text: format!("+{g:.1}"),
                x: i as f64,
                y: self.data.pre_means[i].max(self.data.post_means[i]) + LABEL_LIFT,
            })
            .collect()
    }
}

impl Figure for LearningGainsChart {
    fn index(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Learning Gains by Experience Level"
    }

    fn file_name(&self) -> &'static str {
        "chart1_learning_gains.png"
    }

    fn description(&self) -> &'static str {
        "Learning impact by experience"
    }

    fn check(&self) -> Result<()> {
        self.data.validate()
    }

    fn define_chart(&self, root: &Canvas<'_>, style: &StyleProfile) -> Result<()> {
        let n = self.data.categories.len() as f64;
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
            .x_labels(self.data.categories.len() + 1)
            .x_label_formatter(&|_| String::new())
            .y_labels(12)
            .y_label_formatter(&|v| format!("{v:.1}"))
            .x_desc("Participant Experience Level")
            .axis_desc_style(font(style, style.label_pt, true))
            .label_style(font(style, style.base_pt, false))
            .bold_line_style(grid_style(style))
            .light_line_style(no_line())
            .draw()?;

        let (before, after) = self.bars();
        let edge = BLACK.stroke_width(style.px_u32(0.5));
        for (bars, color, label) in [
            (&before, hex(BEFORE), "Before Using Mocksy"),
            (&after, hex(AFTER), "After Using Mocksy"),
        ] {
            let fill = color.mix(0.8).filled();
            chart
                .draw_series(
                    bars.iter()
                        .map(|b| Rectangle::new([(b.x0, 0.0), (b.x1, b.height)], fill)),
                )?
                .label(label)
                .legend(move |anchor| Rectangle::new(legend_swatch(anchor), fill));
            chart.draw_series(
                bars.iter()
                    .map(|b| Rectangle::new([(b.x0, 0.0), (b.x1, b.height)], edge)),
            )?;
        }

        let gain_style = anchored(
            font(style, style.label_pt, true),
            hex(ANNOTATION),
            HPos::Center,
            VPos::Bottom,
        );
        chart.draw_series(
            self.gain_labels()
                .into_iter()
                .map(|g| Text::new(g.text, (g.x, g.y), gain_style.clone())),
        )?;

        draw_hline(&mut chart, style, x_range, NEUTRAL_SCORE)?;
        chart.draw_series(std::iter::once(Text::new(
            "Neutral Understanding",
            (n - 0.55, NEUTRAL_SCORE + 0.1),
            anchored(italic(style, style.note_pt), hex(NEUTRAL), HPos::Right, VPos::Bottom),
        )))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.9))
            .border_style(&BLACK)
            .label_font(font(style, style.base_pt, false))
            .draw()?;

        draw_y_title(root, &chart, style, Y_TITLE, Y_LABEL_AREA_PT)?;
        draw_x_categories(root, &chart, style, self.data.categories, 0.0)?;
        let labelled = self
            .gain_labels()
            .iter()
            .map(|g| g.category)
            .collect::<Vec<_>>();
        tracing::debug!(?labelled, "learning gains annotated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/learning_gains.rs"]
mod tests;
