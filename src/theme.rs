use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub title_font_size: f32,
    pub axis_font_size: f32,
    pub cell_fill: String,
    /// Outline for diagonal cells (prediction == label).
    pub match_color: String,
    /// Outline for off-diagonal cells.
    pub mismatch_color: String,
    pub cell_stroke_width: f32,
    pub text_color: String,
    pub background: String,
}

impl Theme {
    /// Matplotlib-flavored look of the original chart: white cells with
    /// tab:green / tab:red outlines.
    pub fn classic() -> Self {
        Self {
            font_family: "DejaVu Sans, Verdana, sans-serif".to_string(),
            font_size: 11.0,
            title_font_size: 14.0,
            axis_font_size: 12.0,
            cell_fill: "#FFFFFF".to_string(),
            match_color: "#2CA02C".to_string(),
            mismatch_color: "#D62728".to_string(),
            cell_stroke_width: 1.5,
            text_color: "#262626".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            title_font_size: 15.0,
            axis_font_size: 12.0,
            cell_fill: "#F8FAFF".to_string(),
            match_color: "#16A34A".to_string(),
            mismatch_color: "#DC2626".to_string(),
            cell_stroke_width: 1.4,
            text_color: "#1C2430".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}
