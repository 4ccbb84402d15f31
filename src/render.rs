use std::path::Path;

use anyhow::Result;

use crate::config::{ChartOptions, Config, LayoutConfig};
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::error::ConfigError;
use crate::layout::{ChartLayout, compute_layout};
use crate::table::Table;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

#[derive(Debug, Clone)]
pub struct TextSpec {
    /// Center of the text block.
    pub x: f32,
    pub y: f32,
    pub lines: Vec<String>,
    pub font_size: f32,
    pub font_family: String,
    pub line_height: f32,
    pub color: String,
    /// Rotated 90 degrees counter-clockwise around the anchor (the y-axis
    /// caption).
    pub rotated: bool,
}

/// A drawing surface: rectangles and centered text are all the chart needs.
///
/// The layout engine never touches this trait, so tests can drive it with a
/// recording implementation and zero rendering dependencies.
pub trait Canvas {
    fn draw_rect(&mut self, rect: &RectSpec);
    fn draw_text(&mut self, text: &TextSpec);
}

/// Draws a computed layout onto the supplied canvas.
pub fn draw_chart(layout: &ChartLayout, theme: &Theme, config: &LayoutConfig, canvas: &mut dyn Canvas) {
    canvas.draw_rect(&RectSpec {
        x: 0.0,
        y: 0.0,
        width: layout.width,
        height: layout.height,
        fill: theme.background.clone(),
        stroke: String::new(),
        stroke_width: 0.0,
    });

    let (plot_x, plot_y, plot_width, plot_height) = config.plot_box();

    for cell in &layout.cells {
        let x = plot_x + cell.x.offset / 100.0 * plot_width;
        let y = plot_y + cell.y.offset / 100.0 * plot_height;
        let width = cell.x.extent / 100.0 * plot_width;
        let height = cell.y.extent / 100.0 * plot_height;
        canvas.draw_rect(&RectSpec {
            x,
            y,
            width,
            height,
            fill: cell.fill.clone(),
            stroke: cell.outline.clone(),
            stroke_width: theme.cell_stroke_width,
        });
        if !cell.text.is_blank() {
            canvas.draw_text(&TextSpec {
                x: plot_x + cell.x.center() / 100.0 * plot_width,
                y: plot_y + cell.y.center() / 100.0 * plot_height,
                lines: cell.text.lines.clone(),
                font_size: theme.font_size,
                font_family: theme.font_family.clone(),
                line_height: config.label_line_height,
                color: theme.text_color.clone(),
                rotated: false,
            });
        }
    }

    canvas.draw_text(&TextSpec {
        x: layout.width / 2.0,
        y: config.margin / 2.0,
        lines: vec![layout.title.clone()],
        font_size: theme.title_font_size,
        font_family: theme.font_family.clone(),
        line_height: config.label_line_height,
        color: theme.text_color.clone(),
        rotated: false,
    });
    canvas.draw_text(&TextSpec {
        x: layout.width / 2.0,
        y: layout.height - config.margin / 2.0,
        lines: vec![layout.x_label.clone()],
        font_size: theme.axis_font_size,
        font_family: theme.font_family.clone(),
        line_height: config.label_line_height,
        color: theme.text_color.clone(),
        rotated: false,
    });
    canvas.draw_text(&TextSpec {
        x: config.margin / 2.0,
        y: layout.height / 2.0,
        lines: vec![layout.y_label.clone()],
        font_size: theme.axis_font_size,
        font_family: theme.font_family.clone(),
        line_height: config.label_line_height,
        color: theme.text_color.clone(),
        rotated: true,
    });
}

/// Renders the layout on a fresh standalone surface and returns the SVG
/// document.
pub fn render_svg(layout: &ChartLayout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut canvas = SvgCanvas::new(layout.width, layout.height);
    draw_chart(layout, theme, config, &mut canvas);
    canvas.finish()
}

/// One-call entry point: computes the layout and draws it.
///
/// With a supplied canvas the chart is drawn onto it and `None` is returned,
/// so the chart can be embedded in a larger composed figure; without one a
/// standalone SVG document is produced and returned.
pub fn render_chart(
    table: &Table,
    label_col: &str,
    prediction_col: &str,
    options: &ChartOptions,
    config: &Config,
    canvas: Option<&mut dyn Canvas>,
) -> Result<Option<String>, ConfigError> {
    let layout = compute_layout(
        table,
        label_col,
        prediction_col,
        options,
        &config.theme,
        &config.layout,
    )?;
    match canvas {
        Some(canvas) => {
            draw_chart(&layout, &config.theme, &config.layout, canvas);
            Ok(None)
        }
        None => Ok(Some(render_svg(&layout, &config.theme, &config.layout))),
    }
}

/// SVG-emitting canvas.
pub struct SvgCanvas {
    width: f32,
    height: f32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn draw_rect(&mut self, rect: &RectSpec) {
        let stroke = if rect.stroke.is_empty() {
            String::new()
        } else {
            format!(
                " stroke=\"{}\" stroke-width=\"{:.2}\"",
                rect.stroke, rect.stroke_width
            )
        };
        self.body.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"{}/>",
            rect.x, rect.y, rect.width, rect.height, rect.fill, stroke
        ));
    }

    fn draw_text(&mut self, text: &TextSpec) {
        let total_height = text.lines.len() as f32 * text.font_size * text.line_height;
        let start_y = text.y - total_height / 2.0 + text.font_size;
        let transform = if text.rotated {
            format!(" transform=\"rotate(-90 {:.2} {:.2})\"", text.x, text.y)
        } else {
            String::new()
        };
        self.body.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{family}\" font-size=\"{size}\" fill=\"{color}\"{transform}>",
            x = text.x,
            y = start_y,
            family = text.font_family,
            size = text.font_size,
            color = text.color,
        ));
        for (idx, line) in text.lines.iter().enumerate() {
            let dy = if idx == 0 {
                0.0
            } else {
                text.font_size * text.line_height
            };
            self.body.push_str(&format!(
                "<tspan x=\"{:.2}\" dy=\"{:.2}\">{}</tspan>",
                text.x,
                dy,
                escape_xml(line)
            ));
        }
        self.body.push_str("</text>");
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(640.0, 640.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
