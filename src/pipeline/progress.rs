// file: src/pipeline/progress.rs
// description: progress bars and counters for an extraction run
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionStats {
    pub files_read: usize,
    pub documents: usize,
    pub queries: usize,
    pub judgments: usize,
    pub duration_secs: f64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.documents as f64 / self.duration_secs
    }

    pub fn judgments_per_query(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.judgments as f64 / self.queries as f64
    }
}

pub struct ProgressTracker {
    visible: bool,
    colored: bool,
    stats: ExtractionStats,
    start_time: Instant,
}

impl ProgressTracker {
    /// Bars are only drawn when `visible` is set; counters are always kept.
    pub fn new(visible: bool, colored: bool) -> Self {
        Self {
            visible,
            colored,
            stats: ExtractionStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn file_bar(&self, label: &str, total: usize) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }

        let bar = create_progress_bar(total as u64, self.colored);
        bar.set_message(label.to_string());
        bar
    }

    pub fn add_file(&mut self) {
        self.stats.files_read += 1;
    }

    pub fn add_document(&mut self) {
        self.stats.documents += 1;
    }

    pub fn add_query(&mut self, judgments: usize) {
        self.stats.queries += 1;
        self.stats.judgments += judgments;
    }

    pub fn finish(mut self) -> ExtractionStats {
        self.stats.duration_secs = self.start_time.elapsed().as_secs_f64();
        self.stats
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("=>-")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}
