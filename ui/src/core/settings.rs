//! Fixed timings and sizes used by the interactive sections.

/// Gallery auto-advance period.
pub const GALLERY_INTERVAL_MS: u64 = 4_000;

/// Teacher cards visible at once.
pub const TEACHER_WINDOW: usize = 3;

/// How long a submission toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u64 = 5_000;
