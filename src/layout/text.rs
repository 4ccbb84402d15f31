use crate::config::LayoutConfig;
use crate::layout::types::TextBlock;
use crate::theme::Theme;

/// Measures a multi-line label without touching any font database. Cell
/// labels are short category tokens, so width-class estimation is accurate
/// enough for the fits-in-cell decision.
pub(super) fn measure_label(lines: Vec<String>, theme: &Theme, config: &LayoutConfig) -> TextBlock {
    let width = lines
        .iter()
        .map(|line| estimate_width(line, theme.font_size))
        .fold(0.0, f32::max);
    let height = lines.len() as f32 * theme.font_size * config.label_line_height;
    TextBlock {
        lines,
        width,
        height,
    }
}

pub(super) fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(width_factor).sum::<f32>() * font_size
}

// Width classes calibrated against a metric-compatible sans-serif at 16px.
fn width_factor(ch: char) -> f32 {
    match ch {
        'i' | 'j' | 'l' | 'I' | '!' | '|' | '.' | ',' | ':' | ';' | '\'' => 0.30,
        'f' | 't' | 'r' | ' ' | '(' | ')' | '[' | ']' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' | '@' | '%' | '&' => 0.92,
        'A'..='Z' => 0.68,
        '0'..='9' => 0.60,
        '>' | '<' | '=' | '+' => 0.62,
        _ => 0.56,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_width_scales_with_font_size() {
        let w10 = estimate_width("Car -> Bus", 10.0);
        let w20 = estimate_width("Car -> Bus", 20.0);
        assert!((w20 - w10 * 2.0).abs() < 0.01);
    }

    #[test]
    fn wide_glyphs_measure_wider_than_narrow_ones() {
        assert!(estimate_width("mmm", 12.0) > estimate_width("iii", 12.0));
    }

    #[test]
    fn measure_label_height_counts_lines() {
        let theme = Theme::classic();
        let config = LayoutConfig::default();
        let one = measure_label(vec!["a".to_string()], &theme, &config);
        let two = measure_label(vec!["a".to_string(), "b".to_string()], &theme, &config);
        assert!((two.height - one.height * 2.0).abs() < 0.01);
    }
}
