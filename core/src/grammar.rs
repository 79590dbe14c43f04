//! Recognizes Windows drive paths embedded in free-form text.
//!
//! The grammar is `DriveLetter ':' Separator? PathBody?`, where `PathBody` is
//! one or more components joined by single separators. The character classes
//! are:
//!
//! - drive letter: one ASCII letter (`[A-Za-z]`) that is not preceded by an
//!   ASCII letter, digit or `_`;
//! - separator: `/` or `\`;
//! - component character: ASCII letters and digits, whitespace other than line
//!   breaks, and `.` `_` `-` `(` `)`.
//!
//! Non-Latin script and CJK punctuation are never component characters, so
//! prose in mixed-script text is not absorbed into a match.

/// Shortest accepted full path, in characters (`C:\x`).
const MIN_FULL_PATH_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Drive, colon, separator and at least one component character.
    FullPath,
    /// A drive letter and colon standing on their own, e.g. `D:` in "check D: now".
    BareDrive,
}

/// A substring of the input provisionally recognized as a Windows path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    /// Verbatim, contiguous slice of the scanned text.
    pub original: String,
    pub drive_letter: char,
    /// Everything after the colon, separators included.
    pub remainder: String,
    pub kind: MatchKind,
}

impl CandidateMatch {
    fn new(original: &str, kind: MatchKind) -> Self {
        let mut chars = original.chars();
        let drive_letter = chars.next().unwrap_or_default();
        let remainder = chars.as_str().strip_prefix(':').unwrap_or_default();
        Self {
            original: original.to_string(),
            drive_letter,
            remainder: remainder.to_string(),
            kind,
        }
    }
}

pub(crate) fn is_separator(ch: char) -> bool {
    matches!(ch, '/' | '\\')
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn is_component_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '.' | '_' | '-' | '(' | ')')
        || (ch.is_whitespace() && !is_line_break(ch))
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Fullwidth forms, CJK symbols and general punctuation blocks. Fullwidth
/// letters and digits are left out.
fn is_wide_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205e}'
            | '\u{3000}'..='\u{303f}'
            | '\u{ff01}'..='\u{ff0f}'
            | '\u{ff1a}'..='\u{ff20}'
            | '\u{ff3b}'..='\u{ff40}'
            | '\u{ff5b}'..='\u{ff65}'
    )
}

fn is_trailing_noise(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '.' | ','
                | ';'
                | ':'
                | '!'
                | '?'
                | '/'
                | '\\'
                | '，'
                | '．'
                | '。'
                | '｡'
                | '、'
                | '；'
                | '：'
                | '！'
                | '？'
                | '／'
                | '＼'
        )
}

fn ends_bare_drive(ch: char) -> bool {
    ch.is_whitespace()
        || (ch.is_ascii_punctuation() && !is_separator(ch))
        || is_wide_punctuation(ch)
}

/// Returns true when `candidate` as a whole satisfies the Windows path grammar.
///
/// A single trailing separator is tolerated (`C:\Users\`).
pub fn is_windows_path(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    if !chars.next().is_some_and(|ch| ch.is_ascii_alphabetic()) || chars.next() != Some(':') {
        return false;
    }
    let rest = chars.as_str();
    let body = rest.strip_prefix(['/', '\\']).unwrap_or(rest);
    if body.is_empty() {
        return true;
    }
    let body = body.strip_suffix(['/', '\\']).unwrap_or(body);
    body.split(['/', '\\'])
        .all(|component| !component.is_empty() && component.chars().all(is_component_char))
}

/// Scans `text` and returns every Windows path candidate: full paths first in
/// discovery order, then the bare drive mentions no full path accounts for.
/// No two candidates share the same `original`.
pub fn classify(text: &str) -> Vec<CandidateMatch> {
    let scanner = Scanner::new(text);
    let mut candidates: Vec<CandidateMatch> = Vec::new();

    let spans = scanner.full_path_spans();
    for path in spans.iter().map(|&(start, end)| scanner.slice(start, end)) {
        if !candidates.iter().any(|c| c.original == path) {
            candidates.push(CandidateMatch::new(path, MatchKind::FullPath));
        }
    }

    for drive in scanner.bare_drives(&spans) {
        let subsumed = candidates.iter().any(|c| {
            c.kind == MatchKind::FullPath
                && c
                    .original
                    .strip_prefix(drive)
                    .is_some_and(|rest| rest.starts_with(is_separator))
        });
        if subsumed {
            continue;
        }
        if !candidates.iter().any(|c| c.original == drive) {
            candidates.push(CandidateMatch::new(drive, MatchKind::BareDrive));
        }
    }

    candidates
}

/// Convenience over [`classify`] returning only the matched substrings.
pub fn extract_windows_paths(text: &str) -> Vec<String> {
    classify(text)
        .into_iter()
        .map(|candidate| candidate.original)
        .collect()
}

struct Scanner<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
        }
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).map(|(_, ch)| *ch)
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.chars
            .get(idx)
            .map_or(self.text.len(), |(offset, _)| *offset)
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    fn is_drive_start(&self, idx: usize) -> bool {
        let preceded_by_word = idx
            .checked_sub(1)
            .and_then(|prev| self.char_at(prev))
            .is_some_and(is_word_char);
        !preceded_by_word
            && self.char_at(idx).is_some_and(|ch| ch.is_ascii_alphabetic())
            && self.char_at(idx + 1) == Some(':')
    }

    /// Char ranges of the accepted full paths, trailing noise trimmed.
    fn full_path_spans(&self) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        let mut idx = 0;
        while idx < self.chars.len() {
            let Some(end) = self.scan_full_path(idx) else {
                idx += 1;
                continue;
            };
            let trimmed = self.trim_trailing_noise(idx, end);
            if trimmed - idx >= MIN_FULL_PATH_CHARS {
                found.push((idx, trimmed));
            }
            idx = end.max(idx + 1);
        }
        found
    }

    /// Returns the exclusive end (char index) of the path starting at
    /// `start`, before trailing noise is trimmed.
    fn scan_full_path(&self, start: usize) -> Option<usize> {
        if !self.is_drive_start(start) || !self.char_at(start + 2).is_some_and(is_separator) {
            return None;
        }

        let mut pos = start + 3;
        let mut last_component;
        loop {
            let component_start = pos;
            while self.char_at(pos).is_some_and(is_component_char) {
                pos += 1;
            }
            if pos == component_start {
                // Nothing usable after the separator that follows the colon.
                return None;
            }
            last_component = component_start;
            match (self.char_at(pos), self.char_at(pos + 1)) {
                (Some(sep), Some(next)) if is_separator(sep) && is_component_char(next) => {
                    pos += 1;
                }
                _ => break,
            }
        }

        // The final component stops at its first whitespace so trailing
        // prose ("C:\a to D:\b") stays outside the path.
        if let Some(space) =
            (last_component..pos).find(|&i| self.char_at(i).is_some_and(char::is_whitespace))
        {
            return Some(space);
        }

        // A run cut short by a colon ends in the drive letter of the next
        // full path ("C:\a\D:\b"). A letter followed by a colon and no
        // separator is just the last component ("C:\temp\x: not found").
        if self.char_at(pos) == Some(':')
            && pos > last_component
            && self.is_drive_start(pos - 1)
            && self.char_at(pos + 1).is_some_and(is_separator)
        {
            return Some(pos - 1);
        }

        Some(pos)
    }

    fn trim_trailing_noise(&self, start: usize, mut end: usize) -> usize {
        while end > start && self.char_at(end - 1).is_some_and(is_trailing_noise) {
            end -= 1;
        }
        end
    }

    /// Bare drive mentions outside every span in `full_paths`.
    fn bare_drives(&self, full_paths: &[(usize, usize)]) -> Vec<&'a str> {
        (0..self.chars.len())
            .filter(|&idx| {
                self.is_drive_start(idx)
                    && self.char_at(idx + 2).is_none_or(ends_bare_drive)
                    && !full_paths
                        .iter()
                        .any(|&(start, end)| (start..end).contains(&idx))
            })
            .map(|idx| self.slice(idx, idx + 2))
            .collect()
    }
}
