//! Paragraph reflow stage
//!
//! Regroups sentence units or pause-normalized text into paragraphs joined
//! by blank lines. Both algorithms are total over well-formed input.

use crate::profile::LanguageProfile;
use crate::stages::PARAGRAPH_SENTINEL;
use std::sync::Arc;

/// Headroom factor before an over-length block is wrapped
const WRAP_TOLERANCE: f64 = 1.2;

/// Stage 4a: fixed unit count per paragraph
#[derive(Debug, Clone, Copy)]
pub struct CountReflower {
    units_per_paragraph: usize,
}

impl CountReflower {
    /// Create a reflower grouping `units_per_paragraph` units at a time
    pub fn new(units_per_paragraph: usize) -> Self {
        Self {
            units_per_paragraph: units_per_paragraph.max(1),
        }
    }

    /// Join units into space-separated paragraphs of the configured size
    ///
    /// The last paragraph may hold fewer units. Paragraphs are separated by
    /// a blank line.
    pub fn reflow(&self, units: &[String]) -> String {
        units
            .chunks(self.units_per_paragraph)
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Stage 4b: greedy wrap toward a target character length
#[derive(Debug, Clone)]
pub struct LengthReflower {
    profile: Arc<LanguageProfile>,
    target_chars: usize,
}

impl LengthReflower {
    /// Create a reflower wrapping toward `target_chars` characters
    pub fn new(profile: Arc<LanguageProfile>, target_chars: usize) -> Self {
        Self {
            profile,
            target_chars: target_chars.max(1),
        }
    }

    /// Split pause-normalized text into paragraphs
    ///
    /// Explicit paragraph sentinels delimit candidate blocks. A block within
    /// tolerance of the target stays whole; anything longer is wrapped at
    /// break opportunities. Every paragraph leaves with required
    /// punctuation.
    pub fn reflow(&self, text: &str) -> String {
        let limit = (self.target_chars as f64 * WRAP_TOLERANCE).floor() as usize;
        let mut paragraphs = Vec::new();

        for block in text.split(PARAGRAPH_SENTINEL) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            if block.chars().count() <= limit {
                paragraphs.push(self.finalize(block));
            } else {
                for line in self.wrap(block) {
                    paragraphs.push(self.finalize(&line));
                }
            }
        }

        paragraphs.join("\n\n")
    }

    /// Greedy wrap: cut at the last break opportunity once the target is
    /// reached; a long unbroken token overflows rather than being split
    fn wrap(&self, block: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut count = 0usize;
        let mut break_at: Option<usize> = None;

        for ch in block.chars() {
            current.push(ch);
            count += 1;
            if self.is_break_opportunity(ch) {
                break_at = Some(current.len());
            }
            if count >= self.target_chars {
                if let Some(cut) = break_at {
                    let rest = current.split_off(cut);
                    lines.push(std::mem::take(&mut current));
                    current = rest.trim_start().to_string();
                    count = current.chars().count();
                    break_at = None;
                }
            }
        }
        if !current.trim().is_empty() {
            lines.push(current);
        }

        lines
    }

    /// Break immediately after a pause mark, terminal mark, or space
    fn is_break_opportunity(&self, ch: char) -> bool {
        ch == ' ' || self.profile.is_pause(ch) || self.profile.is_terminal(ch)
    }

    /// Paragraph-final punctuation: terminal and closing marks stay, a
    /// trailing pause mark becomes a full stop, anything else gains one
    fn finalize(&self, paragraph: &str) -> String {
        let full_stop = self.profile.punctuation.full_stop;
        let mut out = paragraph.trim().to_string();
        let last = out.chars().last();

        match last {
            None => out,
            Some(last) if self.profile.is_terminal(last) || self.profile.is_closing(last) => out,
            Some(last) if self.profile.is_pause(last) => {
                out.pop();
                out.push(full_stop);
                out
            }
            Some(_) => {
                out.push(full_stop);
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_profile;

    fn units(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_count_reflow_groups_by_size() {
        let reflower = CountReflower::new(3);
        let out = reflower.reflow(&units(&[
            "一。", "二。", "三。", "四。", "五。", "六。", "七。",
        ]));

        let paragraphs: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "一。 二。 三。");
        assert_eq!(paragraphs[2], "七。");
    }

    #[test]
    fn test_count_reflow_empty_units() {
        assert_eq!(CountReflower::new(5).reflow(&[]), "");
    }

    #[test]
    fn test_count_reflow_single_chunk() {
        let out = CountReflower::new(10).reflow(&units(&["一。", "二。"]));
        assert_eq!(out, "一。 二。");
    }

    fn length_reflower(target: usize) -> LengthReflower {
        LengthReflower::new(get_profile("zh").unwrap(), target)
    }

    #[test]
    fn test_length_short_block_kept_whole() {
        let out = length_reflower(20).reflow("這是一個短段落");
        assert_eq!(out, "這是一個短段落。");
    }

    #[test]
    fn test_length_block_within_tolerance_kept_whole() {
        // 12 chars against a target of 10: exactly at the 1.2x headroom
        let out = length_reflower(10).reflow("十一個字的段落不需要換行");
        assert_eq!(out.split("\n\n").count(), 1);
    }

    #[test]
    fn test_length_long_block_wraps_at_pause() {
        let text = "第一部分的內容比較長，第二部分的內容也比較長，第三部分結束";
        let out = length_reflower(12).reflow(text);

        let paragraphs: Vec<&str> = out.split("\n\n").collect();
        assert!(paragraphs.len() >= 2);
        for paragraph in &paragraphs {
            let last = paragraph.chars().last().unwrap();
            assert_eq!(last, '。');
        }
    }

    #[test]
    fn test_length_trailing_pause_becomes_full_stop() {
        // Wrapping cuts right after the pause mark
        let text = "前半句很長很長很長很長，後半句";
        let out = length_reflower(10).reflow(text);

        let paragraphs: Vec<&str> = out.split("\n\n").collect();
        assert!(paragraphs[0].ends_with('。'));
        assert!(!paragraphs[0].ends_with("，。"));
    }

    #[test]
    fn test_length_unbroken_token_overflows() {
        let token = "沒有任何分隔符的超長字串一直延續下去直到結束";
        let out = length_reflower(5).reflow(token);

        // One paragraph, not cut mid-token
        assert_eq!(out, format!("{token}。"));
    }

    #[test]
    fn test_length_sentinel_splits_blocks() {
        let text = format!("第一段{PARAGRAPH_SENTINEL}第二段");
        let out = length_reflower(50).reflow(&text);
        assert_eq!(out, "第一段。\n\n第二段。");
    }

    #[test]
    fn test_length_closing_quote_is_terminal() {
        let out = length_reflower(50).reflow("他說「好。」");
        assert_eq!(out, "他說「好。」");
    }

    #[test]
    fn test_length_empty_input() {
        assert_eq!(length_reflower(10).reflow(""), "");
    }
}
