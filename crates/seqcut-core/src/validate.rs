// crates/seqcut-core/src/validate.rs
//
// Structural validation for `SequenceStructure`.
//
// Accumulates every finding instead of failing fast — the host layer shows
// the whole list at once. The calculator in `timing` never calls this;
// callers that need trustworthy output run it themselves before trusting
// positions or totals.

use std::collections::HashSet;

use crate::structure::SequenceStructure;

/// Check every structural invariant and return one human-readable string per
/// violation. An empty Vec means the structure is valid.
///
/// An empty/missing sequence list short-circuits: it is the only error
/// reported, since every other check presupposes sequences to index into.
///
/// ```
/// use seqcut_core::structure::SequenceStructure;
/// use seqcut_core::validate::validate_structure;
/// let errors = validate_structure(&SequenceStructure::default());
/// assert_eq!(errors, vec!["No sequences defined".to_string()]);
/// ```
pub fn validate_structure(structure: &SequenceStructure) -> Vec<String> {
    if structure.sequences.is_empty() {
        return vec!["No sequences defined".to_string()];
    }

    let mut errors = Vec::new();

    for (i, seq) in structure.sequences.iter().enumerate() {
        if seq.duration_in_frames == 0 {
            errors.push(format!(
                "Sequence \"{}\" (index {i}) has duration 0 — must be at least 1 frame",
                seq.name,
            ));
        }
    }

    let mut seen_gaps = HashSet::new();
    for (ti, t) in structure.transitions.iter().enumerate() {
        let idx = t.after_sequence_index;

        if idx + 1 >= structure.sequences.len() {
            errors.push(format!(
                "Transition {ti} comes after sequence index {idx}, \
                 but there is no following sequence to overlap with",
            ));
        }
        if t.duration_in_frames == 0 {
            errors.push(format!(
                "Transition {ti} (after sequence index {idx}) has duration 0 \
                 — must be at least 1 frame",
            ));
        }

        // Overlap cannot outlast either adjacent sequence. Checked
        // independently — a long transition between two short sequences
        // reports both.
        if let Some(prev) = structure.sequences.get(idx) {
            if t.duration_in_frames > prev.duration_in_frames {
                errors.push(format!(
                    "Transition {ti} duration {} exceeds preceding sequence \"{}\" duration {}",
                    t.duration_in_frames, prev.name, prev.duration_in_frames,
                ));
            }
        }
        if let Some(next) = structure.sequences.get(idx + 1) {
            if t.duration_in_frames > next.duration_in_frames {
                errors.push(format!(
                    "Transition {ti} duration {} exceeds following sequence \"{}\" duration {}",
                    t.duration_in_frames, next.name, next.duration_in_frames,
                ));
            }
        }

        // At most one transition per gap. Runtime lookups take the first
        // list match, so a duplicate is a silent list-order dependency —
        // reject it here instead.
        if !seen_gaps.insert(idx) {
            errors.push(format!(
                "Multiple transitions declared after sequence index {idx} \
                 — at most one transition per gap",
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Sequence, SequenceStructure, Transition};

    #[test]
    fn valid_structure_has_no_errors() {
        let s = SequenceStructure::with_transitions(
            vec![
                Sequence::new("a", 60),
                Sequence::new("b", 80),
                Sequence::new("c", 90),
            ],
            vec![Transition::new(0, 15), Transition::new(1, 20)],
        );
        assert!(validate_structure(&s).is_empty());
    }

    #[test]
    fn empty_structure_short_circuits() {
        let s = SequenceStructure {
            sequences:   Vec::new(),
            // Would trip three transition checks — but the empty-sequences
            // error suppresses everything else.
            transitions: vec![Transition::new(5, 0)],
        };
        assert_eq!(validate_structure(&s), vec!["No sequences defined".to_string()]);
    }

    #[test]
    fn zero_duration_sequence_named_in_error() {
        let s = SequenceStructure::new(vec![
            Sequence::new("good", 30),
            Sequence::new("broken", 0),
        ]);
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("broken"));
        assert!(errors[0].contains("index 1"));
    }

    #[test]
    fn transition_past_last_gap_rejected() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 30), Sequence::new("b", 30)],
            // Gap 0 is the only gap — gap 1 would need a third sequence.
            vec![Transition::new(1, 10)],
        );
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("no following sequence"));
    }

    #[test]
    fn zero_duration_transition_rejected() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 30), Sequence::new("b", 30)],
            vec![Transition::new(0, 0)],
        );
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duration 0"));
    }

    #[test]
    fn overlap_longer_than_preceding_sequence_rejected() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 10), Sequence::new("b", 50)],
            vec![Transition::new(0, 30)],
        );
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("exceeds preceding sequence \"a\""));
    }

    #[test]
    fn overlap_longer_than_both_neighbors_fires_twice() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 10), Sequence::new("b", 12)],
            vec![Transition::new(0, 30)],
        );
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("preceding"));
        assert!(errors[1].contains("following"));
    }

    #[test]
    fn duplicate_gap_rejected() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 60), Sequence::new("b", 60)],
            vec![Transition::new(0, 10), Transition::new(0, 20)],
        );
        let errors = validate_structure(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at most one transition per gap"));
    }

    #[test]
    fn all_findings_accumulate() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 0), Sequence::new("b", 30)],
            vec![Transition::new(0, 0), Transition::new(3, 10)],
        );
        let errors = validate_structure(&s);
        // zero-duration sequence, zero-duration transition, the same
        // transition exceeding its zero-length neighbor, and the dangling
        // transition index.
        assert!(errors.len() >= 3, "expected several findings, got {errors:?}");
        assert!(errors.iter().any(|e| e.contains("Sequence \"a\"")));
        assert!(errors.iter().any(|e| e.contains("no following sequence")));
    }
}
