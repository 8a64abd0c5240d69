//! Progress display for large tilings

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts placements against the expected total
///
/// Small boards finish before a bar would be readable, so the bar only
/// appears once the expected placement count reaches `PROGRESS_THRESHOLD`.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for `total` placements
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = (enabled && total >= PROGRESS_THRESHOLD).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_message("trominoes");
            bar
        });

        Self { bar }
    }

    /// Create a reporter that never draws
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Test whether a bar is attached
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Count one placement
    pub fn record(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of placements counted so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
