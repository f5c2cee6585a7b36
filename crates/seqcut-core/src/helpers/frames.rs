// crates/seqcut-core/src/helpers/frames.rs
//
// Frame-count formatting for timeline rulers and duration readouts.
//
// Frames are the atomic time unit in this crate; wall-clock rendering needs
// an fps, supplied by the caller. `fps = 0` is treated as 1 rather than
// dividing by zero — a degenerate readout beats a panic in a display helper.

/// Format a frame count as `MM:SS:FF` (minutes, seconds, frames) at `fps`.
///
/// Used on timeline rulers where frame-level precision matters.
///
/// ```
/// use seqcut_core::helpers::frames::format_frames;
/// assert_eq!(format_frames(0, 30),    "00:00:00");
/// assert_eq!(format_frames(1845, 30), "01:01:15");
/// assert_eq!(format_frames(195, 30),  "00:06:15");
/// ```
pub fn format_frames(frame: u32, fps: u32) -> String {
    let fps   = fps.max(1);
    let secs  = frame / fps;
    let m     = secs / 60;
    let s     = secs % 60;
    let f     = frame % fps;
    format!("{m:02}:{s:02}:{f:02}")
}

/// Format a frame count as a compact human-readable duration at `fps`.
///
/// Used in summary readouts where frame-level precision is unnecessary.
///
/// | Range     | Format    | Example   |
/// |-----------|-----------|-----------|
/// | ≥ 1 hour  | `H:MM:SS` | `1:04:35` |
/// | ≥ 1 min   | `M:SS`    | `3:07`    |
/// | < 1 min   | `S.Xs`    | `4.2s`    |
///
/// ```
/// use seqcut_core::helpers::frames::format_frames_compact;
/// assert_eq!(format_frames_compact(126, 30),    "4.2s");
/// assert_eq!(format_frames_compact(5610, 30),   "3:07");
/// assert_eq!(format_frames_compact(116250, 30), "1:04:35");
/// ```
pub fn format_frames_compact(frame: u32, fps: u32) -> String {
    let fps  = fps.max(1) as f64;
    let secs = frame as f64 / fps;
    if secs >= 3600.0 {
        format!(
            "{}:{:02}:{:02}",
            secs as u64 / 3600,
            (secs as u64 % 3600) / 60,
            secs as u64 % 60,
        )
    } else if secs >= 60.0 {
        format!("{}:{:02}", secs as u64 / 60, secs as u64 % 60)
    } else {
        format!("{secs:.1}s")
    }
}
