//! Prompt construction for the summarization call.
//!
//! The prompt is deterministic: a fixed directive per report mode plus
//! one listing line per selected record, in selection order. No
//! truncation, deduplication, or length capping is applied — a very
//! large day produces a very large prompt. Bounded batching (chunk the
//! selection and summarize incrementally) is the known fix if record
//! volume grows.

use folio_core::Selection;
use tracing::debug;

use crate::report::ReportMode;

/// Directive revision, bumped whenever the instruction text changes.
pub const PROMPT_VERSION: &str = "1";

/// Directive shared by both report modes.
const BASE_DIRECTIVE: &str = "You are a research assistant specializing in the earth sciences. \
From the paper listing provided, distill the overall trends and write a digest in an academic \
register. Group the papers by topic and give each paper a one-sentence summary of its core \
contribution. Output Markdown. Do not reproduce the raw paper listing in your output.";

/// Additional structural requirement for the email report.
const APPENDIX_DIRECTIVE: &str = "Structure the digest as 6-8 bullet points covering \
cross-cutting trends, followed by a Markdown table with the columns: topic, representative \
paper, notes.";

/// A built prompt: system directive plus user content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// Fixed system-level directive describing the output shape.
    pub instructions: String,
    /// Deterministic user-level listing of the selected records.
    pub content: String,
}

/// Build the prompt for a non-empty selection.
///
/// Each record contributes exactly one line,
/// `"<title> (<source or "unknown">)"`, in selection order, preceded
/// by the target date. Callers must not invoke this for an empty
/// selection — the generator short-circuits before prompt building.
#[must_use]
pub fn build_prompt(selection: &Selection, mode: ReportMode) -> Prompt {
    let instructions = match mode {
        ReportMode::NarrativeOnly => BASE_DIRECTIVE.to_string(),
        ReportMode::WithAppendix => format!("{BASE_DIRECTIVE}\n{APPENDIX_DIRECTIVE}"),
    };

    let listing: String = selection
        .records
        .iter()
        .map(|r| format!("{} ({})\n", r.title_or_unknown(), r.source_or_unknown()))
        .collect();

    let content = format!(
        "Today's date: {}\nNewly observed papers:\n{listing}",
        selection.date
    );

    debug!(
        version = PROMPT_VERSION,
        records = selection.len(),
        content_bytes = content.len(),
        "prompt built"
    );
    Prompt {
        instructions,
        content,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Record;

    fn record(title: &str, source: Option<&str>) -> Record {
        Record {
            id: title.to_lowercase(),
            title: Some(title.into()),
            source: source.map(Into::into),
            date: "2024-01-01".into(),
            authors: None,
            link: None,
            summary: None,
        }
    }

    fn selection(records: Vec<Record>) -> Selection {
        Selection {
            date: "2024-01-01".into(),
            records,
            skipped: 0,
        }
    }

    #[test]
    fn one_line_per_record_in_order() {
        let sel = selection(vec![
            record("First", Some("Nature")),
            record("Second", Some("Science")),
        ]);
        let prompt = build_prompt(&sel, ReportMode::NarrativeOnly);
        let lines: Vec<&str> = prompt.content.lines().collect();
        assert_eq!(lines[0], "Today's date: 2024-01-01");
        assert_eq!(lines[1], "Newly observed papers:");
        assert_eq!(lines[2], "First (Nature)");
        assert_eq!(lines[3], "Second (Science)");
    }

    #[test]
    fn missing_source_renders_unknown() {
        let sel = selection(vec![record("Solo", None)]);
        let prompt = build_prompt(&sel, ReportMode::NarrativeOnly);
        assert!(prompt.content.contains("Solo (unknown)"));
    }

    #[test]
    fn missing_title_renders_fallback() {
        let mut r = record("x", Some("Nature"));
        r.title = None;
        let prompt = build_prompt(&selection(vec![r]), ReportMode::NarrativeOnly);
        assert!(prompt.content.contains("unknown title (Nature)"));
    }

    #[test]
    fn deterministic_for_same_input() {
        let sel = selection(vec![record("A", Some("S")), record("B", None)]);
        let a = build_prompt(&sel, ReportMode::WithAppendix);
        let b = build_prompt(&sel, ReportMode::WithAppendix);
        assert_eq!(a, b);
    }

    #[test]
    fn no_dedup_or_capping() {
        // 200 identical records still produce 200 listing lines.
        let sel = selection(vec![record("Same", Some("S")); 200]);
        let prompt = build_prompt(&sel, ReportMode::NarrativeOnly);
        let count = prompt
            .content
            .lines()
            .filter(|l| l.starts_with("Same ("))
            .count();
        assert_eq!(count, 200);
    }

    #[test]
    fn appendix_mode_adds_structural_requirement() {
        let sel = selection(vec![record("A", None)]);
        let narrative = build_prompt(&sel, ReportMode::NarrativeOnly);
        let email = build_prompt(&sel, ReportMode::WithAppendix);
        assert!(!narrative.instructions.contains("6-8 bullet points"));
        assert!(email.instructions.contains("6-8 bullet points"));
        assert!(email.instructions.contains("representative"));
        // Both exclude the raw listing from the narrative
        assert!(narrative.instructions.contains("Do not reproduce"));
        assert!(email.instructions.contains("Do not reproduce"));
    }

    #[test]
    fn content_identical_across_modes() {
        let sel = selection(vec![record("A", None)]);
        let a = build_prompt(&sel, ReportMode::NarrativeOnly);
        let b = build_prompt(&sel, ReportMode::WithAppendix);
        assert_eq!(a.content, b.content);
    }
}
