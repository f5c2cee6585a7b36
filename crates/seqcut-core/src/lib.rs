// crates/seqcut-core/src/lib.rs
//
// Pure timing core for sequence compositions — no rendering, no I/O,
// no runtime handles.
//
// A composition is a `structure::SequenceStructure`: an ordered list of
// fixed-duration sequences, optionally joined by transitions that make
// consecutive sequences overlap on the timeline. The `timing` module answers
// placement and point-in-time questions about such a structure; `validate`
// reports structural problems as human-readable strings.
//
// Everything here is a stateless transform over an immutable input —
// concurrent callers need no coordination.

pub mod helpers;
pub mod structure;
pub mod timing;
pub mod validate;
