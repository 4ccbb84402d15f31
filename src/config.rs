use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ordering applied to the outer categories and, filtered, to every band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending by count, ties by first appearance.
    #[default]
    ByFrequency,
    /// Ascending by value.
    Alphabetical,
}

impl SortMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "frequency" | "by_frequency" | "count" => Some(Self::ByFrequency),
            "alphabetical" | "alpha" | "lexicographic" => Some(Self::Alphabetical),
            _ => None,
        }
    }

    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        Self::from_token(token).ok_or_else(|| ConfigError::UnknownSortMode {
            token: token.to_string(),
        })
    }
}

/// Which column drives the outer (band) axis.
///
/// `Horizontal` stacks label bands top to bottom (a precision-style
/// reading); `Vertical` puts prediction bands side by side (recall-style).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "h" | "x" | "horizontal" | "precision" => Some(Self::Horizontal),
            "v" | "y" | "vertical" | "recall" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        Self::from_token(token).ok_or_else(|| ConfigError::UnknownOrientation {
            token: token.to_string(),
        })
    }
}

/// Per-call chart options.
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    sort_mode: Option<SortMode>,
    alphabetical: Option<bool>,
    orientation: Orientation,
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, mode: SortMode) -> Self {
        self.sort_mode = Some(mode);
        self
    }

    /// Deprecated boolean alias for `sort(SortMode::Alphabetical)`, kept for
    /// callers of the earlier API. An explicit `sort` always takes
    /// precedence over this alias.
    pub fn alphabetical(mut self, alphabetical: bool) -> Self {
        self.alphabetical = Some(alphabetical);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Parses both tokens at the boundary, so bad spellings are rejected
    /// before any layout work.
    pub fn from_tokens(sort: Option<&str>, orientation: Option<&str>) -> Result<Self, ConfigError> {
        let mut options = Self::new();
        if let Some(token) = sort {
            options.sort_mode = Some(SortMode::parse(token)?);
        }
        if let Some(token) = orientation {
            options.orientation = Orientation::parse(token)?;
        }
        Ok(options)
    }

    /// The effective sort mode after alias resolution.
    pub fn sort_mode(&self) -> SortMode {
        match (self.sort_mode, self.alphabetical) {
            (Some(mode), _) => mode,
            (None, Some(true)) => SortMode::Alphabetical,
            (None, _) => SortMode::ByFrequency,
        }
    }

    pub fn orientation_mode(&self) -> Orientation {
        self.orientation
    }
}

/// Geometry constants for the layout engine.
///
/// `gap` lives in percent units (the span coordinate space); everything else
/// is pixels in the render target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub gap: f32,
    pub label_padding_x: f32,
    pub label_padding_y: f32,
    pub min_label_area: f32,
    pub label_line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            margin: 56.0,
            gap: 1.0,
            label_padding_x: 6.0,
            label_padding_y: 4.0,
            min_label_area: 500.0,
            label_line_height: 1.4,
        }
    }
}

impl LayoutConfig {
    /// The plot box inside the margins, as (x, y, width, height).
    pub fn plot_box(&self) -> (f32, f32, f32, f32) {
        let width = (self.width - self.margin * 2.0).max(1.0);
        let height = (self.height - self.margin * 2.0).max(1.0);
        (self.margin, self.margin, width, height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: crate::theme::Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = crate::theme::Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}
