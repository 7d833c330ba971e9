use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in text.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(current_line);
                current_line = word.to_string();
                current_width = word_width;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        if lines.is_empty() {
            lines.push(text.to_string());
        }

        lines
    }

    /// Like `wrap`, but words wider than `max_width` are broken so that no
    /// line exceeds it. Nothing is dropped.
    pub fn fit(text: &str, max_width: usize) -> Vec<String> {
        let max_width = max_width.max(1);
        let mut lines = Vec::new();
        for line in Self::wrap(text, max_width) {
            if UnicodeWidthStr::width(line.as_str()) <= max_width {
                lines.push(line);
                continue;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0;
            for ch in line.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if chunk_width > 0 && chunk_width + ch_width > max_width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            if !chunk.is_empty() {
                lines.push(chunk);
            }
        }
        lines
    }

    /// Wraps `text` behind a first-line prefix, continuation lines indented
    /// by the prefix width.
    pub fn wrap_hanging(prefix: &str, text: &str, max_width: usize) -> Vec<String> {
        let indent = UnicodeWidthStr::width(prefix);
        let body = max_width.saturating_sub(indent).max(1);
        Self::fit(text, body)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{}{}", prefix, line)
                } else {
                    format!("{}{}", " ".repeat(indent), line)
                }
            })
            .collect()
    }
}

pub fn display_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// Left offset that centres `content` columns inside `available` columns.
pub fn center_offset(content: u16, available: u16) -> u16 {
    available.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_wrapper() {
        let text = "The quick brown fox jumps over the lazy dog";
        let wrapped = TextWrapper::wrap(text, 10);

        assert!(wrapped.len() > 1, "Text should be wrapped into multiple lines");
        for line in &wrapped {
            assert!(
                UnicodeWidthStr::width(line.as_str()) <= 10,
                "Line width should not exceed max width"
            );
        }

        let empty_wrapped = TextWrapper::wrap("", 10);
        assert_eq!(empty_wrapped, vec![""]);

        // A single word longer than the width stays whole.
        let single_wrapped = TextWrapper::wrap("verylongword", 5);
        assert_eq!(single_wrapped, vec!["verylongword"]);
    }

    #[test]
    fn test_fit_breaks_overlong_words() {
        assert_eq!(TextWrapper::fit("verylongword", 5), vec!["veryl", "ongwo", "rd"]);
        assert_eq!(
            TextWrapper::fit("PostgreSQL Admin", 10),
            vec!["PostgreSQL", "Admin"]
        );
        assert_eq!(TextWrapper::fit("a 🏆🏆🏆", 3), vec!["a", "🏆", "🏆", "🏆"]);
        assert_eq!(TextWrapper::fit("", 4), vec![""]);
    }

    #[test]
    fn test_wrap_hanging_indents_continuations() {
        let lines = TextWrapper::wrap_hanging("• ", "alpha beta gamma", 8);
        assert_eq!(lines, vec!["• alpha", "  beta", "  gamma"]);
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(12, 10), 0);
        assert_eq!(display_width("🏆 x"), 4);
    }
}
