use serde::Serialize;

use crate::config::Orientation;
use crate::table::Value;

/// A slice of one axis in percent space, already inset by the gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub offset: f32,
    pub extent: f32,
}

impl Span {
    pub fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }

    pub fn center(&self) -> f32 {
        self.offset + self.extent / 2.0
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

impl TextBlock {
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

/// One outer category: a band proportional to its share of all valid rows.
#[derive(Debug, Clone, Serialize)]
pub struct BandLayout {
    pub value: Value,
    pub count: usize,
    pub percentage: f32,
    /// Along the outer axis: y for horizontal orientation, x for vertical.
    pub span: Span,
}

/// One observed (label, prediction) combination.
///
/// `label` and `prediction` keep the caller's column semantics regardless of
/// orientation; `x`/`y` are final post-transpose spans in percent space.
#[derive(Debug, Clone, Serialize)]
pub struct CellLayout {
    pub label: Value,
    pub prediction: Value,
    pub count: usize,
    /// This cell's share of its own band, in percent.
    pub row_percentage: f32,
    pub x: Span,
    pub y: Span,
    pub is_diagonal: bool,
    pub fill: String,
    pub outline: String,
    pub text: TextBlock,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub orientation: Orientation,
    /// Render target dimensions in pixels.
    pub width: f32,
    pub height: f32,
    pub bands: Vec<BandLayout>,
    pub cells: Vec<CellLayout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_overlap_is_exclusive_of_touching_edges() {
        let a = Span::new(0.0, 10.0);
        let b = Span::new(10.0, 10.0);
        let c = Span::new(9.0, 5.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn empty_text_block_is_blank() {
        assert!(TextBlock::empty().is_blank());
    }
}
