//! Terminal rendering of sync events
//!
//! Stands in for a windowed progress dialog: consumes the orchestrator's
//! event stream and renders one progress bar per repository.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;

use crate::error::SyncError;
use crate::events::{EventSink, Progress};

const PROGRESS_BAR_LENGTH: u64 = 100;
const PROGRESS_CHARS: &str = "##-";
const PROGRESS_TEMPLATE: &str = "{prefix:.bold} [{bar:20}] {wide_msg}";

/// [`EventSink`] that maps sync events onto indicatif progress bars.
pub struct ProgressRenderer {
    multi: MultiProgress,
    style: ProgressStyle,
    bars: HashMap<String, ProgressBar>,
}

impl ProgressRenderer {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .expect("progress template is valid")
            .progress_chars(PROGRESS_CHARS);
        ProgressRenderer {
            multi: MultiProgress::new(),
            style,
            bars: HashMap::new(),
        }
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ProgressRenderer {
    fn on_initialized(&mut self, repositories: &[String]) {
        for name in repositories {
            let pb = self.multi.add(ProgressBar::new(PROGRESS_BAR_LENGTH));
            pb.set_style(self.style.clone());
            pb.set_prefix(format!("🟡 {name}"));
            pb.set_message("waiting...");
            self.bars.insert(name.clone(), pb);
        }
    }

    fn on_progress(&mut self, progress: &Progress) {
        let pb = self
            .bars
            .entry(progress.repository.clone())
            .or_insert_with(|| {
                let pb = self.multi.add(ProgressBar::new(PROGRESS_BAR_LENGTH));
                pb.set_style(self.style.clone());
                pb.set_prefix(format!("🟡 {}", progress.repository));
                pb
            });

        pb.set_position(progress.percent_complete.clamp(0.0, 100.0) as u64);
        pb.set_message(progress.message.clone());
        if progress.is_complete {
            pb.set_prefix(format!("🟢 {}", progress.repository));
            pb.finish();
        }
    }

    fn on_fatal_error(&mut self, error: &SyncError) {
        for pb in self.bars.values() {
            if !pb.is_finished() {
                pb.abandon();
            }
        }
        let _ = self.multi.println(format!("🔴 {error}"));
    }
}
