//! Per-project aggregation
//!
//! ```text
//! source files ──par──▶ tags ─▶ date/author ─▶ baseline ─▶ base path
//!                                                            │
//!                         DirectoryBatches (one entry per output dir)
//!                                                            │
//!            one read_dir per dir ──par──▶ ArtifactGrouping ─▶ GroupedArtifacts
//! ```

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, error, info, warn};

use crate::config::ReportConfig;
use crate::errors::Result;
use crate::features::aggregation::ArtifactGrouping;
use crate::features::artifact_resolution::{DirectoryBatches, SiblingArtifactResolver};
use crate::features::normalization::{AuthorNormalizer, DateNormalizer, NormalizedDate};
use crate::features::path_mapping::PathMapper;
use crate::features::tag_extraction::TagExtractor;
use crate::pipeline::result::ProjectReport;
use crate::shared::models::{Project, RawArtifactFile};
use crate::shared::ports::FileFilter;

/// Groups one project's artifacts by period and author
pub struct ProjectAggregator {
    extractor: TagExtractor,
    dates: DateNormalizer,
    authors: AuthorNormalizer,
    baseline: Option<NormalizedDate>,
    resolver: SiblingArtifactResolver,
    source_suffix: String,
    pool: Option<ThreadPool>,
}

impl ProjectAggregator {
    /// Build from a validated config.
    ///
    /// A baseline that matches none of the date patterns is ignored with a
    /// warning. `parallel_workers` gets a dedicated pool, otherwise the
    /// global rayon pool is used.
    pub fn new(config: &ReportConfig) -> Result<Self> {
        config.validate()?;

        let dates = DateNormalizer::new(config.date_patterns.as_slice());
        let baseline = match config.baseline_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = dates.normalize(raw);
                if parsed.is_none() {
                    warn!("Baseline date '{}' matches no date pattern, ignoring it", raw);
                }
                parsed
            }
        };

        let pool = match config.parallel_workers {
            Some(workers) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("tagcov-worker-{}", i))
                    .build()?,
            ),
            None => None,
        };

        Ok(Self {
            extractor: TagExtractor::from_config(config),
            dates,
            authors: AuthorNormalizer::new(config.author_delimiters.as_slice()),
            baseline,
            resolver: SiblingArtifactResolver::new(config.artifact_suffix.clone()),
            source_suffix: config.source_suffix.clone(),
            pool,
        })
    }

    pub fn baseline(&self) -> Option<&NormalizedDate> {
        self.baseline.as_ref()
    }

    /// Worker count used for the parallel stages
    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map(ThreadPool::current_num_threads)
            .unwrap_or_else(rayon::current_num_threads)
    }

    /// Group every artifact of `project`.
    ///
    /// Enumeration failures from `filter` are fatal; everything per file
    /// (unreadable sources, missing or bad tags, empty directories) only
    /// drops that file.
    pub fn aggregate(&self, project: &Project, filter: &dyn FileFilter) -> Result<ProjectReport> {
        match &self.pool {
            Some(pool) => pool.install(|| self.run(project, filter)),
            None => self.run(project, filter),
        }
    }

    fn run(&self, project: &Project, filter: &dyn FileFilter) -> Result<ProjectReport> {
        let start = Instant::now();
        debug!(
            "Aggregating {} with {} workers",
            project.id,
            self.workers()
        );

        let sources: Vec<_> = filter
            .files(&project.source_directory)?
            .into_iter()
            .filter(|path| self.is_source(path))
            .collect();

        let mapper = PathMapper::new(
            &project.source_directory,
            &project.output_directory,
            self.source_suffix.as_str(),
        );

        let batches = DirectoryBatches::new();
        sources
            .par_iter()
            .filter_map(|source| self.raw_artifact(source, &mapper))
            .for_each(|raw| batches.insert(raw));
        let tagged_files = batches.raw_count();

        let grouping = ArtifactGrouping::new();
        let resolution = self
            .resolver
            .resolve_batches(&batches.into_batches(), |artifact| grouping.insert(artifact));
        let grouped = grouping.into_grouped();

        info!("Java source file authors: {:?}", grouped.authors());

        let elapsed = start.elapsed();
        info!(
            "Project {}: {} source files, {} tagged, {} artifacts in {} directories ({:.3} s)",
            project.id,
            sources.len(),
            tagged_files,
            resolution.artifacts_found,
            resolution.directories_listed,
            elapsed.as_secs_f64()
        );

        Ok(ProjectReport {
            project: project.id.clone(),
            grouped,
            source_files: sources.len(),
            tagged_files,
            resolution,
            elapsed,
        })
    }

    fn is_source(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.source_suffix.as_str()))
            .unwrap_or(false)
    }

    /// Per-file stage: tags → normalized date/author → baseline → base path.
    ///
    /// `None` means the file does not take part in the report.
    pub fn raw_artifact(&self, source: &Path, mapper: &PathMapper) -> Option<RawArtifactFile> {
        let tags = match self.extractor.extract(source) {
            Ok(tags) => tags,
            Err(e) => {
                error!("{}", e);
                return None;
            }
        };

        // missing tags were already reported by the extractor
        let (raw_date, raw_author) = (tags.date()?, tags.author()?);

        let Some(date) = self.dates.normalize(raw_date) else {
            debug!(
                "Unparsable @{} '{}' in {}",
                self.extractor.date_tag(),
                raw_date,
                source.display()
            );
            return None;
        };

        let Some(author) = self.authors.normalize(raw_author) else {
            debug!(
                "Empty @{} '{}' in {}",
                self.extractor.author_tag(),
                raw_author,
                source.display()
            );
            return None;
        };

        if let Some(baseline) = &self.baseline {
            if date < *baseline {
                debug!("{} dated {} is before baseline {}", source.display(), date, baseline);
                return None;
            }
        }

        let base_path = mapper.base_path(source)?;
        let directory = base_path.parent()?.to_path_buf();
        Some(RawArtifactFile::new(
            date.period_key(),
            author,
            directory,
            base_path,
        ))
    }
}
