use serde::Serialize;

use crate::layout::ChartLayout;
use crate::table::Value;

/// Flattened, renderer-independent view of a computed layout, for
/// downstream tooling and golden tests.
#[derive(Debug, Serialize)]
pub struct GeometryDump {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub orientation: String,
    pub width: f32,
    pub height: f32,
    pub bands: Vec<BandDump>,
    pub cells: Vec<CellDump>,
}

#[derive(Debug, Serialize)]
pub struct BandDump {
    pub value: Value,
    pub count: usize,
    pub percentage: f32,
    pub offset: f32,
    pub extent: f32,
}

#[derive(Debug, Serialize)]
pub struct CellDump {
    pub label: Value,
    pub prediction: Value,
    pub count: usize,
    pub row_percentage: f32,
    pub x: [f32; 2],
    pub y: [f32; 2],
    pub is_diagonal: bool,
    pub text_lines: Vec<String>,
}

impl GeometryDump {
    pub fn from_layout(layout: &ChartLayout) -> Self {
        let bands = layout
            .bands
            .iter()
            .map(|band| BandDump {
                value: band.value.clone(),
                count: band.count,
                percentage: band.percentage,
                offset: band.span.offset,
                extent: band.span.extent,
            })
            .collect();

        let cells = layout
            .cells
            .iter()
            .map(|cell| CellDump {
                label: cell.label.clone(),
                prediction: cell.prediction.clone(),
                count: cell.count,
                row_percentage: cell.row_percentage,
                x: [cell.x.offset, cell.x.extent],
                y: [cell.y.offset, cell.y.extent],
                is_diagonal: cell.is_diagonal,
                text_lines: cell.text.lines.clone(),
            })
            .collect();

        GeometryDump {
            title: layout.title.clone(),
            x_label: layout.x_label.clone(),
            y_label: layout.y_label.clone(),
            orientation: format!("{:?}", layout.orientation),
            width: layout.width,
            height: layout.height,
            bands,
            cells,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartOptions;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use crate::table::Table;
    use crate::theme::Theme;

    #[test]
    fn dump_serializes_values_untagged() {
        let table = Table::from_pairs("Label", "Prediction", [("Car", "Bus"), ("Bus", "Bus")]);
        let layout = compute_layout(
            &table,
            "Label",
            "Prediction",
            &ChartOptions::new(),
            &Theme::classic(),
            &LayoutConfig::default(),
        )
        .unwrap();
        let json = GeometryDump::from_layout(&layout).to_json().unwrap();
        assert!(json.contains("\"value\": \"Car\""));
        assert!(json.contains("\"orientation\": \"Horizontal\""));
        assert!(json.contains("\"is_diagonal\": true"));
    }
}
