//! Pipeline observer: hooks for logging and profiling
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Both extractors run the same stage sequence:
//!
//! | Stage | Keywords | Sentences |
//! |-------|----------|-----------|
//! | [`STAGE_SEGMENT`] | split sentences | split sentences |
//! | [`STAGE_CLEAN`] | clean, filter, reduce | clean, reduce |
//! | [`STAGE_GRAPH`] | co-occurrence graph | similarity graph |
//! | [`STAGE_RANK`] | rank | rank |
//! | [`STAGE_FORMAT`] | expand surface forms | select and reorder |

use std::time::{Duration, Instant};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_CLEAN: &str = "clean";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_FORMAT: &str = "format";

/// All stages in execution order
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_CLEAN,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_FORMAT,
];

/// Measurements for one completed stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    /// A report carrying only the elapsed time
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// Max score change of the last ranking iteration
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Builder for reports carrying graph or ranking metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Wall-clock timer for a single stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Receives stage boundary notifications
///
/// All methods default to no-ops; implement only the ones you need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called after segmentation with the sentence count
    fn on_sentences(&mut self, _count: usize) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every completed stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in completion order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// The report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage timings
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

impl<O: PipelineObserver + ?Sized> PipelineObserver for &mut O {
    fn on_stage_start(&mut self, stage: &'static str) {
        (**self).on_stage_start(stage)
    }

    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        (**self).on_stage_end(stage, report)
    }

    fn on_sentences(&mut self, count: usize) {
        (**self).on_sentences(count)
    }
}
