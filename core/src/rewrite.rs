use std::cmp::Reverse;

use serde::Serialize;

use crate::convert::DEFAULT_MOUNT_ROOT;
use crate::convert::win_path_to_mount;
use crate::env::EnvironmentDetector;
use crate::env::InteropProbe;
use crate::grammar::classify;

/// One substitution performed by [`TextRewriter::rewrite`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    pub original: String,
    pub converted: String,
}

/// Result of rewriting one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// In discovery order (full paths first, then bare drives).
    pub conversions: Vec<ConversionRecord>,
    /// Whether the environment check passed. When false, `text` is the input
    /// verbatim and nothing was scanned.
    pub interop: bool,
}

impl Rewrite {
    pub fn into_parts(self) -> (String, Vec<ConversionRecord>) {
        (self.text, self.conversions)
    }
}

/// Finds Windows paths in free-form text and replaces them with their mount
/// paths, leaving every other character untouched.
#[derive(Debug, Clone)]
pub struct TextRewriter<D> {
    detector: D,
    mount_root: String,
}

impl<D: EnvironmentDetector> TextRewriter<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            mount_root: DEFAULT_MOUNT_ROOT.to_string(),
        }
    }

    pub fn with_mount_root(mut self, mount_root: impl Into<String>) -> Self {
        self.mount_root = mount_root.into();
        self
    }

    pub fn rewrite(&self, text: &str) -> Rewrite {
        if !self.detector.is_interop() {
            tracing::debug!("not an interop environment; leaving text unchanged");
            return Rewrite {
                text: text.to_string(),
                conversions: Vec::new(),
                interop: false,
            };
        }

        let conversions: Vec<ConversionRecord> = classify(text)
            .into_iter()
            .filter_map(|candidate| {
                let Some(converted) = win_path_to_mount(&self.mount_root, &candidate.original)
                else {
                    tracing::debug!("skipping malformed candidate {:?}", candidate.original);
                    return None;
                };
                (converted != candidate.original).then(|| ConversionRecord {
                    original: candidate.original,
                    converted,
                })
            })
            .collect();

        // Longest originals first: a shorter original that is a substring of
        // a longer one must not touch the longer one before it is replaced.
        let mut ordered: Vec<&ConversionRecord> = conversions.iter().collect();
        ordered.sort_by_key(|record| Reverse(record.original.len()));

        let mut rewritten = text.to_string();
        for record in ordered {
            rewritten = rewritten.replace(&record.original, &record.converted);
        }

        tracing::debug!("converted {} path(s)", conversions.len());
        Rewrite {
            text: rewritten,
            conversions,
            interop: true,
        }
    }
}

/// Rewrites `text` after probing the environment with the default probes.
pub fn rewrite_text(text: &str) -> Rewrite {
    TextRewriter::new(InteropProbe::default()).rewrite(text)
}
