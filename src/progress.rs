//! Progress bar display for install plans

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// One bar per install plan, one tick per planned application
#[derive(Debug, Clone)]
pub struct ProgressDisplay {
    plan_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Visible bar drawn on stderr
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let plan_pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        plan_pb.set_style(style);
        Self { plan_pb }
    }

    /// Bar that never draws; used by library callers and tests
    pub fn hidden() -> Self {
        Self {
            plan_pb: ProgressBar::hidden(),
        }
    }

    /// Reset for a plan of `total` applications
    pub fn start(&self, total: usize) {
        self.plan_pb.reset();
        self.plan_pb.set_length(total as u64);
    }

    /// Show which application and stage is in progress
    pub fn update_app(&self, app_id: &str, stage: &str) {
        self.plan_pb.set_message(format!("{stage} {app_id}"));
    }

    /// One planned application done
    pub fn inc_app(&self) {
        self.plan_pb.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.plan_pb.position()
    }

    pub fn finish(&self) {
        self.plan_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.plan_pb.abandon();
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::hidden()
    }
}
