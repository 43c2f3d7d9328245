//! Parallel ingestion of a directory of DICOM files.
//!
//! Ingestion happens in three phases.
//! Candidate files are first discovered by walking the directory tree.
//! A pool of worker threads then parses them,
//! while the calling thread gathers the outcomes
//! into a [`DataSetCollection`].

use crate::collection::{CollectionError, DataSetCollection};
use crate::file::{ReadError, ReadOptions};
use crate::DataSet;
use crossbeam_channel::{bounded, Receiver, Sender};
use glob::{MatchOptions, Pattern, PatternError};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// An error which prevents a directory from being ingested at all.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DirectoryError {
    #[snafu(display("Could not access directory '{}'", path.display()))]
    AccessRoot {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("'{}' is not a directory", path.display()))]
    NotADirectory { path: PathBuf, backtrace: Backtrace },
    #[snafu(display("Invalid file name pattern `{}`", pattern))]
    InvalidPattern {
        pattern: String,
        source: PatternError,
    },
}

/// An error concerning a single file of the directory.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum IngestError {
    #[snafu(display("Could not parse file"))]
    Parse { source: ReadError },
    #[snafu(display("Could not add data set to collection"))]
    Add { source: CollectionError },
    #[snafu(display("Ingestion was cancelled"))]
    Cancelled { backtrace: Backtrace },
}

impl IngestError {
    /// Whether this error was caused by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, IngestError::Cancelled { .. })
    }
}

/// A shareable handle for cancelling an ongoing ingestion.
///
/// Workers check the handle before picking up each file,
/// so files already being parsed are completed.
#[derive(Debug, Clone, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    pub fn new() -> Self {
        Cancellation::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Callback receiving the number of finished files and the total.
pub type ProgressFn = dyn Fn(usize, usize) + Send + Sync;

/// Callback receiving each per-file failure.
/// Returning [`ControlFlow::Break`] stops the ingestion.
pub type ErrorFn = dyn Fn(&Path, &IngestError) -> ControlFlow<()> + Send + Sync;

/// Options for ingesting a directory.
#[derive(Clone)]
pub struct ParseDirectoryOptions {
    /// Number of parsing threads.
    /// Defaults to the number of available CPUs.
    pub workers: usize,
    /// Whether to descend into subdirectories. `true` by default.
    pub recursive: bool,
    /// Glob pattern matched case-insensitively against file names.
    /// `*.dcm` by default.
    pub pattern: String,
    /// Whether to stop at the first failure. `false` by default.
    pub fail_fast: bool,
    /// Options for parsing each file.
    pub read_options: ReadOptions,
    on_progress: Option<Arc<ProgressFn>>,
    on_error: Option<Arc<ErrorFn>>,
    cancellation: Option<Cancellation>,
}

impl fmt::Debug for ParseDirectoryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseDirectoryOptions")
            .field("workers", &self.workers)
            .field("recursive", &self.recursive)
            .field("pattern", &self.pattern)
            .field("fail_fast", &self.fail_fast)
            .field("read_options", &self.read_options)
            .field("on_progress", &self.on_progress.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("cancellation", &self.cancellation)
            .finish()
    }
}

impl Default for ParseDirectoryOptions {
    fn default() -> Self {
        ParseDirectoryOptions {
            workers: num_cpus::get(),
            recursive: true,
            pattern: "*.dcm".to_string(),
            fail_fast: false,
            read_options: ReadOptions::default(),
            on_progress: None,
            on_error: None,
            cancellation: None,
        }
    }
}

impl ParseDirectoryOptions {
    pub fn new() -> Self {
        ParseDirectoryOptions::default()
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn read_options(mut self, read_options: ReadOptions) -> Self {
        self.read_options = read_options;
        self
    }

    /// Set a callback to be called after each file,
    /// from the calling thread.
    pub fn on_progress<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(f));
        self
    }

    /// Set a callback to be called on each failed file,
    /// from the calling thread.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&Path, &IngestError) -> ControlFlow<()> + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = Some(cancellation);
        self
    }
}

/// The outcome of ingesting a directory.
#[derive(Debug)]
pub struct ParseResult {
    /// All data sets successfully parsed and added.
    pub collection: DataSetCollection,
    /// The number of files which matched the pattern.
    pub discovered: usize,
    pub parsed: usize,
    pub failed: usize,
    /// Per-file failures by absolute path.
    pub errors: HashMap<PathBuf, IngestError>,
    pub duration: Duration,
}

/// Ingest every `*.dcm` file under the given directory.
pub fn parse_directory<P>(root: P) -> Result<ParseResult, DirectoryError>
where
    P: AsRef<Path>,
{
    parse_directory_with_options(root, &ParseDirectoryOptions::default())
}

/// Ingest the files under the given directory.
///
/// Only failing to access the directory itself is an error here.
/// Failures of individual files are recorded in the result,
/// which holds every data set gathered until then.
pub fn parse_directory_with_options<P>(
    root: P,
    options: &ParseDirectoryOptions,
) -> Result<ParseResult, DirectoryError>
where
    P: AsRef<Path>,
{
    let started = Instant::now();
    let root = root.as_ref();
    let root = root
        .canonicalize()
        .context(AccessRootSnafu { path: root })?;
    ensure!(root.is_dir(), NotADirectorySnafu { path: &root });
    let pattern = Pattern::new(&options.pattern).context(InvalidPatternSnafu {
        pattern: &options.pattern,
    })?;

    let files = discover(&root, options.recursive, &pattern);
    let discovered = files.len();
    info!("Found {} files in {}", discovered, root.display());

    let mut result = ParseResult {
        collection: DataSetCollection::new(),
        discovered,
        parsed: 0,
        failed: 0,
        errors: HashMap::new(),
        duration: Duration::default(),
    };
    if discovered > 0 {
        parse_all(files, options, &mut result);
    }
    result.duration = started.elapsed();

    info!(
        "Parsed {} files, {} failed, in {:?}",
        result.parsed, result.failed, result.duration
    );
    Ok(result)
}

/// Collect the regular files under `root` whose name matches the pattern.
/// Entries which cannot be read are skipped.
fn discover(root: &Path, recursive: bool, pattern: &Pattern) -> Vec<PathBuf> {
    let match_options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(false, |name| pattern.matches_with(name, match_options))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

type Outcome = (PathBuf, Result<DataSet, IngestError>);

fn parse_all(files: Vec<PathBuf>, options: &ParseDirectoryOptions, result: &mut ParseResult) {
    let total = files.len();
    let (job_tx, job_rx) = bounded(total);
    for path in files {
        if job_tx.send(path).is_err() {
            break;
        }
    }
    drop(job_tx);
    let (result_tx, result_rx) = bounded(total);
    let workers = options.workers.clamp(1, total);

    thread::scope(|s| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            s.spawn(move || work(jobs, results, options));
        }
        drop(result_tx);

        let mut done = 0;
        for (path, outcome) in result_rx.iter() {
            done += 1;
            let outcome = outcome.and_then(|ds| result.collection.add(ds).context(AddSnafu));
            let mut stop = false;
            match outcome {
                Ok(()) => {
                    debug!("Parsed {}", path.display());
                    result.parsed += 1;
                }
                Err(e) => {
                    warn!("Failed to ingest {}: {}", path.display(), snafu::Report::from_error(&e));
                    result.failed += 1;
                    let flow = options
                        .on_error
                        .as_ref()
                        .map_or(ControlFlow::Continue(()), |f| f(&path, &e));
                    stop = options.fail_fast || flow.is_break();
                    result.errors.insert(path, e);
                }
            }
            if let Some(progress) = &options.on_progress {
                progress(done, total);
            }
            if stop {
                debug!("Stopping ingestion after {} of {} files", done, total);
                break;
            }
        }
        // remaining workers stop at their next send
        drop(result_rx);
    });
}

fn work(jobs: Receiver<PathBuf>, results: Sender<Outcome>, options: &ParseDirectoryOptions) {
    for path in jobs {
        let cancelled = options
            .cancellation
            .as_ref()
            .map_or(false, Cancellation::is_cancelled);
        let outcome = if cancelled {
            CancelledSnafu.fail()
        } else {
            options.read_options.open_file(&path).context(ParseSnafu)
        };
        if results.send((path, outcome)).is_err() || cancelled {
            return;
        }
    }
}
