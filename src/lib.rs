pub mod config;
pub mod dump;
pub mod error;
pub mod layout;
pub mod render;
pub mod table;
pub mod theme;

pub use config::{ChartOptions, Config, LayoutConfig, Orientation, RenderConfig, SortMode};
pub use error::ConfigError;
pub use layout::{BandLayout, CellLayout, ChartLayout, Span, TextBlock, compute_layout};
pub use render::{Canvas, RectSpec, TextSpec, render_chart, render_svg};
pub use table::{Table, Value, ValueKind};
pub use theme::Theme;
