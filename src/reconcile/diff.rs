//! Line diffs between template content and installed files
//!
//! The contract is block counts: a block is a maximal contiguous run of
//! added-only or removed-only lines from a line-based LCS diff. The same
//! routine backs add, update, and diff reporting so the counts always agree.

use similar::{ChangeTag, TextDiff};

/// Aggregate counts of added and removed line blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added_blocks: usize,
    pub removed_blocks: usize,
}

impl DiffSummary {
    pub fn is_empty(&self) -> bool {
        self.added_blocks == 0 && self.removed_blocks == 0
    }

    pub fn merge(&mut self, other: DiffSummary) {
        self.added_blocks += other.added_blocks;
        self.removed_blocks += other.removed_blocks;
    }
}

/// One line of a rendered diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// Line present locally but not in the template source
    Added(String),
    /// Line present in the template source but not locally
    Removed(String),
    /// Line common to both
    Context(String),
}

/// Count added/removed blocks between the (transformed) template content and
/// the local file content.
pub fn summarize(source: &str, local: &str) -> DiffSummary {
    let diff = TextDiff::from_lines(source, local);
    let mut summary = DiffSummary::default();
    let mut previous: Option<ChangeTag> = None;

    for change in diff.iter_all_changes() {
        let tag = change.tag();
        match tag {
            ChangeTag::Insert if previous != Some(ChangeTag::Insert) => {
                summary.added_blocks += 1;
            }
            ChangeTag::Delete if previous != Some(ChangeTag::Delete) => {
                summary.removed_blocks += 1;
            }
            _ => {}
        }
        previous = Some(tag);
    }

    summary
}

/// Full annotated line listing between template source and local content.
pub fn line_changes(source: &str, local: &str) -> Vec<DiffLine> {
    let diff = TextDiff::from_lines(source, local);
    diff.iter_all_changes()
        .map(|change| {
            let line = change.value().trim_end_matches('\n').to_string();
            match change.tag() {
                ChangeTag::Insert => DiffLine::Added(line),
                ChangeTag::Delete => DiffLine::Removed(line),
                ChangeTag::Equal => DiffLine::Context(line),
            }
        })
        .collect()
}
