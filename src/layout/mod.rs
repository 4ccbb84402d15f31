mod text;
mod treemap;
pub(crate) mod types;
pub use types::*;

use std::collections::HashMap;

use crate::config::{ChartOptions, LayoutConfig, Orientation};
use crate::error::ConfigError;
use crate::table::{Table, Value, ValueKind};
use crate::theme::Theme;

use treemap::{allocate_spans, order_band, order_master, percent_of, tally};

/// Lays out a confusion treemap: one band per outer category, one cell per
/// observed (label, prediction) combination, all spans in percent space.
///
/// The computation is always outer-major over canonical pairs; a vertical
/// orientation swaps the pair roles up front and transposes the finished
/// geometry, so there is exactly one layout path.
pub fn compute_layout(
    table: &Table,
    label_col: &str,
    prediction_col: &str,
    options: &ChartOptions,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<ChartLayout, ConfigError> {
    let orientation = options.orientation_mode();
    let sort = options.sort_mode();

    let label_idx = resolve_column(table, label_col)?;
    let prediction_idx = resolve_column(table, prediction_col)?;
    check_column_kinds(table, label_col, label_idx, prediction_col, prediction_idx)?;

    // Rows with a missing value in either column are dropped; for vertical
    // orientation the prediction column drives the bands.
    let mut pairs: Vec<(Value, Value)> = Vec::new();
    for row in table.rows() {
        if let (Some(label), Some(prediction)) = (&row[label_idx], &row[prediction_idx]) {
            match orientation {
                Orientation::Horizontal => pairs.push((label.clone(), prediction.clone())),
                Orientation::Vertical => pairs.push((prediction.clone(), label.clone())),
            }
        }
    }
    let total = pairs.len();

    let mut outer = tally(pairs.iter().map(|(outer, _)| outer));
    order_master(&mut outer, sort);
    let master_rank: HashMap<Value, usize> = outer
        .iter()
        .enumerate()
        .map(|(rank, tally)| (tally.value.clone(), rank))
        .collect();

    let mut inner_first_seen: HashMap<Value, usize> = HashMap::new();
    for (row, (_, inner)) in pairs.iter().enumerate() {
        inner_first_seen.entry(inner.clone()).or_insert(row);
    }

    let outer_percentages: Vec<f32> = outer
        .iter()
        .map(|tally| percent_of(tally.count, total))
        .collect();
    let outer_spans = allocate_spans(&outer_percentages, config.gap);

    let mut bands = Vec::with_capacity(outer.len());
    let mut cells = Vec::new();
    for ((category, &percentage), &band_span) in
        outer.iter().zip(&outer_percentages).zip(&outer_spans)
    {
        bands.push(BandLayout {
            value: category.value.clone(),
            count: category.count,
            percentage,
            span: band_span,
        });

        let mut inner = tally(
            pairs
                .iter()
                .filter(|(outer, _)| *outer == category.value)
                .map(|(_, inner)| inner),
        );
        order_band(&mut inner, sort, &master_rank, &inner_first_seen);

        let row_percentages: Vec<f32> = inner
            .iter()
            .map(|tally| percent_of(tally.count, category.count))
            .collect();
        let inner_spans = allocate_spans(&row_percentages, config.gap);

        for ((entry, &row_percentage), &cell_span) in
            inner.iter().zip(&row_percentages).zip(&inner_spans)
        {
            let is_diagonal = entry.value == category.value;
            let (label, prediction) = match orientation {
                Orientation::Horizontal => (category.value.clone(), entry.value.clone()),
                Orientation::Vertical => (entry.value.clone(), category.value.clone()),
            };
            let outline = if is_diagonal {
                theme.match_color.clone()
            } else {
                theme.mismatch_color.clone()
            };
            // Cell text reads label -> prediction in both orientations.
            let lines = vec![
                format!("{label} -> {prediction}"),
                entry.count.to_string(),
            ];
            cells.push(CellLayout {
                label,
                prediction,
                count: entry.count,
                row_percentage,
                // Canonical frame: bands on y, cells along x.
                x: cell_span,
                y: band_span,
                is_diagonal,
                fill: theme.cell_fill.clone(),
                outline,
                text: TextBlock {
                    lines,
                    width: 0.0,
                    height: 0.0,
                },
            });
        }
    }

    if orientation == Orientation::Vertical {
        for cell in &mut cells {
            std::mem::swap(&mut cell.x, &mut cell.y);
        }
    }

    fit_cell_labels(&mut cells, theme, config);

    Ok(ChartLayout {
        title: format!("Confusion matrix ({label_col}->{prediction_col})"),
        x_label: format!("Portion of {prediction_col} [%]"),
        y_label: format!("Portion of {label_col} [%]"),
        orientation,
        width: config.width,
        height: config.height,
        bands,
        cells,
    })
}

fn resolve_column(table: &Table, name: &str) -> Result<usize, ConfigError> {
    table
        .column_index(name)
        .ok_or_else(|| ConfigError::ColumnNotFound {
            name: name.to_string(),
            available: table.columns().to_vec(),
        })
}

/// Both columns must carry a single shared value kind across their present
/// cells; a kind conflict is rejected before any layout work.
fn check_column_kinds(
    table: &Table,
    label_col: &str,
    label_idx: usize,
    prediction_col: &str,
    prediction_idx: usize,
) -> Result<(), ConfigError> {
    let mut seen: Option<ValueKind> = None;
    for row in table.rows() {
        for idx in [label_idx, prediction_idx] {
            let Some(value) = &row[idx] else { continue };
            let kind = value.kind();
            match seen {
                None => seen = Some(kind),
                Some(first) if first != kind => {
                    return Err(ConfigError::ColumnTypeMismatch {
                        label: label_col.to_string(),
                        prediction: prediction_col.to_string(),
                        first,
                        second: kind,
                    });
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Measures each cell's label against its pixel box; labels that do not fit
/// (or whose cell is below the minimum area) are blanked so the renderer
/// skips them.
fn fit_cell_labels(cells: &mut [CellLayout], theme: &Theme, config: &LayoutConfig) {
    let (_, _, plot_width, plot_height) = config.plot_box();
    for cell in cells {
        let lines = std::mem::take(&mut cell.text.lines);
        let block = text::measure_label(lines, theme, config);
        let cell_width = cell.x.extent / 100.0 * plot_width;
        let cell_height = cell.y.extent / 100.0 * plot_height;
        let fits = block.width <= (cell_width - config.label_padding_x * 2.0).max(0.0)
            && block.height <= (cell_height - config.label_padding_y * 2.0).max(0.0);
        let area = cell_width * cell_height;
        cell.text = if fits && area >= config.min_label_area {
            block
        } else {
            TextBlock::empty()
        };
    }
}
