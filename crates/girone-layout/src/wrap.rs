/// Width measurement for a rendered line of text. Font metrics live with
/// the host; the layout engine only ever asks for a width.
pub trait TextMeasure {
    fn width(&self, line: &str) -> f64;
}

/// Fixed-advance estimator for hosts without real font metrics.
#[derive(Debug, Clone, Copy)]
pub struct CharAdvanceMeasure {
    pub advance: f64,
}

impl TextMeasure for CharAdvanceMeasure {
    fn width(&self, line: &str) -> f64 {
        line.chars().count() as f64 * self.advance
    }
}

/// Relative line height used for baseline offsets, in em.
pub const LINE_HEIGHT_EM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    pub line_height_em: f64,
}

impl WrappedText {
    /// Baseline offset of each line in em, first line at 0.
    pub fn baseline_offsets(&self) -> Vec<f64> {
        (0..self.lines.len())
            .map(|i| i as f64 * self.line_height_em)
            .collect()
    }
}

/// Greedy word wrap: append the next word, measure, and if the line now
/// exceeds the limit revert the append and start a new line with that word.
/// A word that alone exceeds the limit gets its own line rather than being
/// split.
pub fn wrap_text(text: &str, max_width: f64, measure: &dyn TextMeasure) -> WrappedText {
    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        line.push(word);
        if measure.width(&line.join(" ")) > max_width && line.len() > 1 {
            line.pop();
            lines.push(line.join(" "));
            line = vec![word];
        }
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }

    WrappedText {
        lines,
        line_height_em: LINE_HEIGHT_EM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure() -> CharAdvanceMeasure {
        CharAdvanceMeasure { advance: 1.0 }
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let wrapped = wrap_text("hello world", 20.0, &measure());
        assert_eq!(wrapped.lines, vec!["hello world"]);
    }

    #[test]
    fn no_line_exceeds_the_limit_when_words_fit() {
        let text = "the dramatic conditions of prisons in twenty regions";
        let wrapped = wrap_text(text, 12.0, &measure());
        for line in &wrapped.lines {
            assert!(
                measure().width(line) <= 12.0,
                "line {line:?} exceeds the limit"
            );
        }
    }

    #[test]
    fn concatenated_words_reproduce_the_input_in_order() {
        let text = "one two three four five six seven eight";
        let wrapped = wrap_text(text, 9.0, &measure());
        let rejoined: Vec<&str> = wrapped
            .lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn oversize_word_gets_its_own_line() {
        let wrapped = wrap_text("a incomprehensibilities b", 10.0, &measure());
        assert_eq!(
            wrapped.lines,
            vec!["a", "incomprehensibilities", "b"]
        );
    }

    #[test]
    fn baseline_offsets_step_by_line_height() {
        let wrapped = wrap_text("one two three", 3.0, &measure());
        let offsets = wrapped.baseline_offsets();
        assert_eq!(offsets.len(), wrapped.lines.len());
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[1] - LINE_HEIGHT_EM).abs() < 1e-12);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        let wrapped = wrap_text("   ", 10.0, &measure());
        assert!(wrapped.lines.is_empty());
    }
}
