// crates/seqcut-core/src/timing.rs
//
// The duration/position calculator. Pure functions over an immutable
// `SequenceStructure` — no state, no I/O.
//
// Policy: garbage in, best-effort out. These functions never fail on a
// malformed structure; they clamp to zero or skip unreferenceable
// transitions. Callers that need hard guarantees run
// `validate::validate_structure` first.
//
// All frame math is u32 with saturating arithmetic — "clamp at zero" falls
// out of `saturating_sub` instead of a signed cursor plus a max(0).

use crate::structure::{SequencePosition, SequenceStructure, Transition};

/// Total composition length in frames: the sum of all sequence durations
/// minus the sum of all transition overlaps, floored at 0.
///
/// ```
/// use seqcut_core::structure::{Sequence, SequenceStructure, Transition};
/// use seqcut_core::timing::total_duration;
/// let s = SequenceStructure::with_transitions(
///     vec![Sequence::new("a", 60), Sequence::new("b", 80), Sequence::new("c", 90)],
///     vec![Transition::new(0, 15), Transition::new(1, 20)],
/// );
/// assert_eq!(total_duration(&s), 60 + 80 + 90 - 15 - 20);
/// ```
pub fn total_duration(structure: &SequenceStructure) -> u32 {
    let sequences:   u32 = structure.sequences.iter().map(|s| s.duration_in_frames).sum();
    let transitions: u32 = structure.transitions.iter().map(|t| t.duration_in_frames).sum();
    sequences.saturating_sub(transitions)
}

/// Place every sequence on the timeline, in input order.
///
/// A running cursor starts at 0. Before placing sequence `i`, a transition
/// declared after sequence `i - 1` pulls the cursor back by its overlap
/// duration — the incoming sequence starts before the outgoing one ends.
/// The pulled-back start saturates at 0, which absorbs a misconfigured
/// transition longer than everything placed so far. The cursor then advances
/// to the sequence's end.
///
/// The first sequence always starts at 0; empty input yields an empty Vec.
pub fn sequence_positions(structure: &SequenceStructure) -> Vec<SequencePosition> {
    let mut positions = Vec::with_capacity(structure.sequences.len());
    let mut cursor: u32 = 0;

    for (i, seq) in structure.sequences.iter().enumerate() {
        let from = match i.checked_sub(1).and_then(|prev| structure.transition_after(prev)) {
            Some(t) => cursor.saturating_sub(t.duration_in_frames),
            None    => cursor,
        };
        let to = from.saturating_add(seq.duration_in_frames);
        positions.push(SequencePosition { from, to });
        cursor = to;
    }
    positions
}

/// Indices of every sequence whose placed range contains `frame`, ascending.
///
/// Ranges are half-open — `from` is included, `to` is excluded. A frame
/// inside a transition overlap yields two (or more) indices; a frame before
/// the first sequence or at/after the last `to` yields none.
pub fn overlapping_sequences(positions: &[SequencePosition], frame: u32) -> Vec<usize> {
    positions.iter()
        .enumerate()
        .filter(|(_, p)| p.contains(frame))
        .map(|(i, _)| i)
        .collect()
}

/// A transition matched at a point in time, with its overlap region bounds.
///
/// `overlap_start` / `overlap_end` delimit the half-open frame range
/// `[next.from, after.to)` during which both adjacent sequences are active.
#[derive(Clone, Copy, Debug)]
pub struct TransitionWindow<'a> {
    pub transition:    &'a Transition,
    pub overlap_start: u32,
    pub overlap_end:   u32,
}

/// The transition whose overlap region contains `frame`, if any.
///
/// Transitions referencing positions that don't exist are skipped — that
/// only happens on an unvalidated structure, and skipping beats panicking in
/// a visualization helper. When duplicates share a gap, the first list match
/// wins (the validator rejects that configuration).
pub fn transition_at_frame<'a>(
    structure: &'a SequenceStructure,
    positions: &[SequencePosition],
    frame:     u32,
) -> Option<TransitionWindow<'a>> {
    structure.transitions.iter().find_map(|t| {
        let after = positions.get(t.after_sequence_index)?;
        let next  = positions.get(t.after_sequence_index + 1)?;
        let (start, end) = (next.from, after.to);
        (start <= frame && frame < end).then(|| TransitionWindow {
            transition:    t,
            overlap_start: start,
            overlap_end:   end,
        })
    })
}
