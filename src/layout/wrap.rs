use crate::units::Pt;
use log::debug;
use std::str::SplitWhitespace;

/// What happens to content that does not fit inside the bounds handed to [wrap].
///
/// Labels are fixed-size physical media with no pagination, so there is nowhere for
/// overflowing text to go.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Drop it silently: the tail of a word wider than a line is cut off, and every word
    /// after the vertical bound is discarded.
    #[default]
    Truncate,
}

/// One line of a wrapped block, positioned vertically in label space
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub y: Pt,
}

/// Iterator over the lines of a wrapped block, see [wrap]
pub struct Wrap<'a, M> {
    words: SplitWhitespace<'a>,
    buffer: String,
    y: Pt,
    max_width: Pt,
    line_height: Pt,
    max_y: Pt,
    measure: M,
    policy: OverflowPolicy,
    done: bool,
}

/// Greedily fills lines with whole words, left to right.
///
/// Words are separated by whitespace. Each word is appended to the current line for as
/// long as `measure(line) <= max_width`; when a word does not fit, the line is emitted at
/// the current `y`, `y` advances by `line_height`, and the word starts the next line. A
/// word that cannot fit on a line by itself loses characters from its end until it does
/// (the removed characters are discarded, not carried to the next line).
///
/// Before each word is consumed the vertical position is checked against `max_y`; once
/// `y > max_y` everything left, including the line being built, is dropped. The final
/// line is emitted if `y <= max_y` when the words run out.
///
/// ```
/// use label_gen::layout::wrap;
/// use label_gen::Pt;
///
/// let measure = |s: &str| Pt(s.chars().count() as f32);
/// let lines: Vec<_> = wrap("the quick brown fox", Pt(9.0), Pt(0.0), Pt(1.0), Pt(10.0), measure)
///     .map(|line| line.text)
///     .collect();
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap<M>(
    text: &str,
    max_width: Pt,
    start_y: Pt,
    line_height: Pt,
    max_y: Pt,
    measure: M,
) -> Wrap<'_, M>
where
    M: Fn(&str) -> Pt,
{
    Wrap {
        words: text.split_whitespace(),
        buffer: String::new(),
        y: start_y,
        max_width,
        line_height,
        max_y,
        measure,
        policy: OverflowPolicy::Truncate,
        done: false,
    }
}

/// Drop characters from the end of `word` until it measures no wider than `max_width`.
/// Returns the word untouched if it already fits, and an empty string if not even its
/// first character does.
pub fn truncate_to_width<M>(word: &str, max_width: Pt, measure: M) -> &str
where
    M: Fn(&str) -> Pt,
{
    let mut end = word.len();
    let mut fitted = word;
    while !fitted.is_empty() && measure(fitted) > max_width {
        end = fitted
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        fitted = &word[..end];
    }
    if end < word.len() {
        debug!("truncated {word:?} to {fitted:?} to fit {max_width}pt");
    }
    fitted
}

impl<'a, M> Wrap<'a, M>
where
    M: Fn(&str) -> Pt,
{
    /// Make a word the start of a new line, cutting it down if it cannot fit on its own
    fn start_line(&mut self, word: &str) {
        let fitted = match self.policy {
            OverflowPolicy::Truncate => truncate_to_width(word, self.max_width, &self.measure),
        };
        self.buffer.clear();
        self.buffer.push_str(fitted);
    }
}

impl<'a, M> Iterator for Wrap<'a, M>
where
    M: Fn(&str) -> Pt,
{
    type Item = WrappedLine;

    fn next(&mut self) -> Option<WrappedLine> {
        if self.done {
            return None;
        }

        loop {
            if self.y > self.max_y {
                // out of room; the line being built goes with the rest
                self.done = true;
                return None;
            }

            let Some(word) = self.words.next() else {
                self.done = true;
                if self.buffer.is_empty() {
                    return None;
                }
                return Some(WrappedLine {
                    text: std::mem::take(&mut self.buffer),
                    y: self.y,
                });
            };

            if self.buffer.is_empty() {
                // a blank buffer either starts fresh or holds a word truncated to nothing
                self.start_line(word);
                continue;
            }

            let candidate = format!("{} {}", self.buffer, word);
            if (self.measure)(&candidate) <= self.max_width {
                self.buffer = candidate;
                continue;
            }

            let line = WrappedLine {
                text: std::mem::take(&mut self.buffer),
                y: self.y,
            };
            self.y += self.line_height;
            self.start_line(word);
            return Some(line);
        }
    }
}
