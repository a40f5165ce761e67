//! Pipeline
//!
//! - `aggregator`   - one project: scan → tag → normalize → map → resolve → group
//! - `orchestrator` - one or many projects, report groups, timing
//! - `report`       - default report-support sink
//! - `result`       - per-project and per-run summaries

pub mod aggregator;
pub mod orchestrator;
pub mod report;
pub mod result;

pub use aggregator::ProjectAggregator;
pub use orchestrator::ProjectOrchestrator;
pub use report::BundleReportSupport;
pub use result::{ProjectReport, ReportSummary};
