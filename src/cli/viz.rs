//! Terminal visualization using braille graphics
//!
//! Renders the subsystem effort distribution as a bar chart built from
//! Unicode braille characters, with a legend keyed by bar position.

use drawille::Canvas;

/// Chart dimensions in braille pixels
const CHART_HEIGHT: u32 = 32;
const BAR_WIDTH: u32 = 10;
const BAR_GAP: u32 = 6;

/// Render a bar chart of (label, effort) entries
///
/// Bars are scaled against the largest entry. Entries with zero effort
/// still occupy a slot so the legend lines up with the bars.
pub fn render_effort_bars(entries: &[(String, f64)]) -> String {
    if entries.is_empty() {
        return "  (nothing enabled to chart)".to_string();
    }

    let max = entries
        .iter()
        .map(|(_, effort)| *effort)
        .fold(0.0_f64, f64::max);

    let width = entries.len() as u32 * (BAR_WIDTH + BAR_GAP);
    let baseline = CHART_HEIGHT - 1;
    let mut canvas = Canvas::new(width, CHART_HEIGHT);

    for x in 0..width {
        canvas.set(x, baseline);
    }

    for (i, (_, effort)) in entries.iter().enumerate() {
        let height = if max > 0.0 {
            ((effort / max) * f64::from(baseline)).round() as u32
        } else {
            0
        };
        if height == 0 {
            continue;
        }

        let x0 = i as u32 * (BAR_WIDTH + BAR_GAP);
        for x in x0..x0 + BAR_WIDTH {
            for y in baseline - height..baseline {
                canvas.set(x, y);
            }
        }
    }

    let mut output = canvas.frame();
    output.push('\n');
    for (i, (label, effort)) in entries.iter().enumerate() {
        output.push_str(&format!("  {:>2}  {}  {:.1}\n", i + 1, label, effort));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entries_render_placeholder() {
        let output = render_effort_bars(&[]);
        assert!(output.contains("nothing enabled"));
    }

    #[test]
    fn test_legend_lists_every_entry() {
        let entries = vec![
            ("Flight Software".to_string(), 35.0),
            ("Ground Segment".to_string(), 12.0),
        ];

        let output = render_effort_bars(&entries);
        assert!(output.contains("Flight Software"));
        assert!(output.contains("35.0"));
        assert!(output.contains("Ground Segment"));
        assert!(output.contains("12.0"));
    }

    #[test]
    fn test_all_zero_efforts_still_render() {
        let entries = vec![("Flight Software".to_string(), 0.0)];
        let output = render_effort_bars(&entries);
        assert!(output.contains("0.0"));
    }
}
