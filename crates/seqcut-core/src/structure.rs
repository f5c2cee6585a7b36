// crates/seqcut-core/src/structure.rs
//
// Pure composition data — no rendering, no runtime handles.
// Serializable via serde. Built once by the host layer (static analysis or
// configuration) and treated as immutable input by `timing` and `validate`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual style tag for a transition.
///
/// Purely descriptive — the timing calculator never reads it. Host layers use
/// it to pick a renderer and a picker label. Serialized with the project —
/// never rename or remove existing variants without a migration path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionPresentation {
    Fade,
    Slide,
    Wipe,
    Zoom,
    Custom,
}

impl Default for TransitionPresentation {
    fn default() -> Self { TransitionPresentation::Fade }
}

impl TransitionPresentation {
    /// Human-readable label shown in host UI pickers.
    pub fn label(self) -> &'static str {
        match self {
            TransitionPresentation::Fade   => "Fade",
            TransitionPresentation::Slide  => "Slide",
            TransitionPresentation::Wipe   => "Wipe",
            TransitionPresentation::Zoom   => "Zoom",
            TransitionPresentation::Custom => "Custom",
        }
    }
}

/// A named, fixed-duration span of frames within a composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Stable identity for host-layer bookkeeping (selection, diffing).
    /// Never read by the calculator — placement is purely positional.
    #[serde(default = "Uuid::new_v4")]
    pub id:   Uuid,
    /// Display label. Not unique — the validator names sequences by
    /// label *and* index for that reason.
    pub name: String,
    /// Frame offset reported by the authoring layer. Informational only:
    /// real placement is recomputed by `timing::sequence_positions`.
    #[serde(default)]
    pub from: u32,
    /// Length in frames. Invariant: > 0 (checked by `validate_structure`).
    pub duration_in_frames: u32,
}

impl Sequence {
    pub fn new(name: impl Into<String>, duration_in_frames: u32) -> Self {
        Self {
            id:   Uuid::new_v4(),
            name: name.into(),
            from: 0,
            duration_in_frames,
        }
    }
}

/// A declared temporal overlap between two consecutive sequences.
///
/// The transition sits in the *gap* after `after_sequence_index`: the
/// following sequence starts `duration_in_frames` frames before the preceding
/// one ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Index of the sequence this transition comes after.
    /// Invariant: `<= sequences.len() - 2` — there must be a following
    /// sequence to overlap with.
    pub after_sequence_index: usize,
    /// Overlap length in frames. Invariant: > 0 and no longer than either
    /// adjacent sequence (checked by `validate_structure`).
    pub duration_in_frames: u32,
    /// Optional visual style. `None` leaves the choice to the host layer.
    #[serde(default)]
    pub presentation: Option<TransitionPresentation>,
}

impl Transition {
    pub fn new(after_sequence_index: usize, duration_in_frames: u32) -> Self {
        Self { after_sequence_index, duration_in_frames, presentation: None }
    }

    pub fn with_presentation(mut self, presentation: TransitionPresentation) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

/// An ordered list of sequences plus the transitions between them.
///
/// Constructed once, never mutated in place. Invariant: at most one
/// transition per `after_sequence_index` (enforced by `validate_structure`;
/// on unvalidated input the first declaration wins everywhere).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceStructure {
    pub sequences: Vec<Sequence>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl SequenceStructure {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences, transitions: Vec::new() }
    }

    pub fn with_transitions(sequences: Vec<Sequence>, transitions: Vec<Transition>) -> Self {
        Self { sequences, transitions }
    }

    /// The transition declared for the gap after sequence `index`, if any.
    ///
    /// First list match wins when duplicates slipped past validation.
    ///
    /// ```
    /// use seqcut_core::structure::{Sequence, SequenceStructure, Transition};
    /// let s = SequenceStructure::with_transitions(
    ///     vec![Sequence::new("intro", 60), Sequence::new("main", 80)],
    ///     vec![Transition::new(0, 15)],
    /// );
    /// assert_eq!(s.transition_after(0).map(|t| t.duration_in_frames), Some(15));
    /// assert!(s.transition_after(1).is_none());
    /// ```
    #[inline]
    pub fn transition_after(&self, index: usize) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.after_sequence_index == index)
    }

    /// Deserialize a structure from the host layer's JSON form.
    ///
    /// Missing `id` fields get fresh UUIDs; missing `transitions` means none.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize back to JSON (pretty-printed, diff-friendly).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Derived half-open frame range `[from, to)` for one sequence.
///
/// Computed by `timing::sequence_positions` — never stored in the structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePosition {
    pub from: u32,
    pub to:   u32,
}

impl SequencePosition {
    /// Half-open containment test: `from` is included, `to` is excluded.
    #[inline]
    pub fn contains(self, frame: u32) -> bool {
        self.from <= frame && frame < self.to
    }

    /// Placed length in frames.
    #[inline]
    pub fn duration(self) -> u32 {
        self.to.saturating_sub(self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_after_picks_first_declaration() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 30), Sequence::new("b", 30)],
            vec![Transition::new(0, 5), Transition::new(0, 9)],
        );
        assert_eq!(s.transition_after(0).unwrap().duration_in_frames, 5);
    }

    #[test]
    fn position_contains_is_half_open() {
        let p = SequencePosition { from: 45, to: 125 };
        assert!(p.contains(45));
        assert!(p.contains(124));
        assert!(!p.contains(125));
        assert!(!p.contains(44));
    }

    #[test]
    fn json_defaults_fill_in() {
        // Hand-authored config: no ids, no `from`, no transitions.
        let json = r#"{
            "sequences": [
                { "name": "intro", "duration_in_frames": 60 },
                { "name": "main",  "duration_in_frames": 80 }
            ]
        }"#;
        let s = SequenceStructure::from_json(json).unwrap();
        assert_eq!(s.sequences.len(), 2);
        assert!(s.transitions.is_empty());
        assert_eq!(s.sequences[0].from, 0);
        assert_ne!(s.sequences[0].id, s.sequences[1].id);
    }

    #[test]
    fn json_round_trip_preserves_structure() {
        let s = SequenceStructure::with_transitions(
            vec![Sequence::new("a", 60), Sequence::new("b", 80)],
            vec![Transition::new(0, 15).with_presentation(TransitionPresentation::Wipe)],
        );
        let back = SequenceStructure::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn presentation_labels_are_stable() {
        assert_eq!(TransitionPresentation::Fade.label(), "Fade");
        assert_eq!(TransitionPresentation::Custom.label(), "Custom");
    }
}
