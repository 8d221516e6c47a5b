#[derive(Debug, Clone)]
pub struct StyleProfile {
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    pub font_family: &'static str,
    pub base_pt: f64,
    pub title_pt: f64,
    pub label_pt: f64,
    pub tick_pt: f64,
    pub note_pt: f64,
    pub grid_alpha: f64,
    pub margin_pt: f64,
}

impl StyleProfile {
    /// Academic paper look: serif text, 8x5 inch figures at 300 DPI.
    pub fn paper_v1() -> Self {
        Self {
            dpi: 300,
            width_in: 8.0,
            height_in: 5.0,
            font_family: "serif",
            base_pt: 10.0,
            title_pt: 13.0,
            label_pt: 11.0,
            tick_pt: 9.0,
            note_pt: 8.0,
            grid_alpha: 0.3,
            margin_pt: 12.0,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Converts typographic points to pixels at the profile DPI.
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    pub fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/style.rs"]
mod tests;
