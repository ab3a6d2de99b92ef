// prefs.rs — Decode preferences and display/notification globals.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;
use crate::inflate::MemberPolicy;

// ---------------------------------------------------------------------------
// Display / notification globals
// ---------------------------------------------------------------------------

/// Global notification level.  0 = silent, 1 = errors only, 2 = results +
/// warnings, 3 = progress, 4+ = verbose.
pub static DISPLAY_LEVEL: AtomicI32 = AtomicI32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current notification level.
#[inline]
pub fn display_level() -> i32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the notification level.
#[inline]
pub fn set_display_level(level: i32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Write a formatted message to stderr when the current notification level
/// is at least `$level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::io::prefs::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// Per-operation decode preferences.
///
/// `silent` suppresses the per-call byte-count report only; it has no effect
/// on decode semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefs {
    /// Suppress per-call diagnostics.
    pub silent: bool,
    /// Multi-member handling forwarded to the decode core.
    pub member_policy: MemberPolicy,
}
