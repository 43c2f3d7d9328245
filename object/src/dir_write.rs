//! Parallel writing of a data set collection into a directory.
//!
//! Files are either laid out flat, as `{SOPInstanceUID}.dcm`,
//! or in a patient/study/series hierarchy:
//!
//! ```text
//! {patient}/{StudyInstanceUID}/{SeriesInstanceUID}/{SOPInstanceUID}.dcm
//! ```
//!
//! Data sets which cannot be placed in the hierarchy
//! may fall back to `_flat/{SOPInstanceUID}.dcm`.

use crate::collection::DataSetCollection;
use crate::write::{write_file_with_options, WriteError, WriteOptions};
use crate::DataSet;
use crossbeam_channel::{bounded, Receiver, Sender};
use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// The name of the fallback subdirectory.
pub const FALLBACK_DIR: &str = "_flat";

/// The maximum length of a sanitized path component, in characters.
const MAX_COMPONENT_LENGTH: usize = 200;

/// An error concerning a single data set of the collection.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum FileWriteError {
    #[snafu(display("Missing {} required to name the output file", tag))]
    MissingUid { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not determine the patient folder"))]
    MissingPatientFolder { backtrace: Backtrace },
    #[snafu(display("Could not write '{}'", path.display()))]
    Write { path: PathBuf, source: WriteError },
}

/// How output files are named in flat mode.
///
/// The hierarchical layout always uses the SOP Instance UID.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FileNaming {
    /// Keep the original file name.
    /// Data sets do not record where they came from,
    /// so this currently resolves to the SOP Instance UID as well.
    #[default]
    Original,
    /// `{SOPInstanceUID}.dcm`
    SopInstanceUid,
}

/// Derives the patient folder name of a data set.
pub type PatientFolderFn = dyn Fn(&DataSet) -> Option<String> + Send + Sync;

/// Callback receiving the number of finished files and the total.
pub type ProgressFn = dyn Fn(usize, usize) + Send + Sync;

/// The default patient folder: the Patient ID,
/// or the Study Instance UID if the former is empty.
pub fn default_patient_folder(ds: &DataSet) -> Option<String> {
    trimmed(ds, tags::PATIENT_ID)
        .or_else(|| trimmed(ds, tags::STUDY_INSTANCE_UID))
        .map(|name| sanitize(&name))
}

/// Options for writing a collection into a directory.
#[derive(Clone)]
pub struct DirectoryWriteOptions {
    /// Number of writing threads.
    /// Defaults to the number of available CPUs.
    pub workers: usize,
    /// Whether to use the patient/study/series layout. `false` by default.
    pub hierarchical: bool,
    pub file_naming: FileNaming,
    /// Whether data sets which do not fit the hierarchy
    /// are written to the fallback directory. `true` by default.
    pub fallback_flat: bool,
    /// Options for each file.
    /// Missing directories are always created.
    pub write_options: WriteOptions,
    patient_folder: Arc<PatientFolderFn>,
    on_progress: Option<Arc<ProgressFn>>,
}

impl fmt::Debug for DirectoryWriteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryWriteOptions")
            .field("workers", &self.workers)
            .field("hierarchical", &self.hierarchical)
            .field("file_naming", &self.file_naming)
            .field("fallback_flat", &self.fallback_flat)
            .field("write_options", &self.write_options)
            .field("on_progress", &self.on_progress.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for DirectoryWriteOptions {
    fn default() -> Self {
        DirectoryWriteOptions {
            workers: num_cpus::get(),
            hierarchical: false,
            file_naming: FileNaming::default(),
            fallback_flat: true,
            write_options: WriteOptions::default(),
            patient_folder: Arc::new(default_patient_folder),
            on_progress: None,
        }
    }
}

impl DirectoryWriteOptions {
    pub fn new() -> Self {
        DirectoryWriteOptions::default()
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn hierarchical(mut self, hierarchical: bool) -> Self {
        self.hierarchical = hierarchical;
        self
    }

    pub fn file_naming(mut self, file_naming: FileNaming) -> Self {
        self.file_naming = file_naming;
        self
    }

    pub fn fallback_flat(mut self, fallback_flat: bool) -> Self {
        self.fallback_flat = fallback_flat;
        self
    }

    pub fn write_options(mut self, write_options: WriteOptions) -> Self {
        self.write_options = write_options;
        self
    }

    /// Set the function naming patient folders in hierarchical mode.
    /// Its output is sanitized before use.
    pub fn patient_folder<F>(mut self, f: F) -> Self
    where
        F: Fn(&DataSet) -> Option<String> + Send + Sync + 'static,
    {
        self.patient_folder = Arc::new(f);
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
}

/// The outcome of writing a collection.
#[derive(Debug, Default)]
pub struct DirectoryWriteResult {
    pub written: usize,
    pub failed: usize,
    /// Failures by SOP Instance UID,
    /// or `unknown` for data sets without one.
    pub errors: HashMap<String, FileWriteError>,
    /// SOP Instance UIDs of the files written to the fallback directory.
    pub fallback_files: Vec<String>,
    pub duration: Duration,
}

/// Write every data set of the collection into `dir`
/// with the default options.
pub fn write_directory<P>(dir: P, collection: &DataSetCollection) -> DirectoryWriteResult
where
    P: AsRef<Path>,
{
    write_directory_with_options(dir, collection, &DirectoryWriteOptions::default())
}

/// Write every data set of the collection into `dir`.
///
/// Failures of individual data sets are recorded in the result.
pub fn write_directory_with_options<P>(
    dir: P,
    collection: &DataSetCollection,
    options: &DirectoryWriteOptions,
) -> DirectoryWriteResult
where
    P: AsRef<Path>,
{
    let started = Instant::now();
    let dir = dir.as_ref();
    let datasets = collection.datasets();
    info!("Writing {} data sets to {}", datasets.len(), dir.display());

    let mut result = DirectoryWriteResult::default();
    if !datasets.is_empty() {
        write_all(dir, datasets, options, &mut result);
    }
    result.duration = started.elapsed();

    info!(
        "Wrote {} files, {} failed, in {:?}",
        result.written, result.failed, result.duration
    );
    result
}

struct Outcome {
    sop_instance_uid: String,
    fallback: bool,
    result: Result<(), FileWriteError>,
}

fn write_all(
    dir: &Path,
    datasets: Vec<Arc<DataSet>>,
    options: &DirectoryWriteOptions,
    result: &mut DirectoryWriteResult,
) {
    let total = datasets.len();
    let (job_tx, job_rx) = bounded(total);
    for ds in datasets {
        if job_tx.send(ds).is_err() {
            break;
        }
    }
    drop(job_tx);
    let (result_tx, result_rx) = bounded(total);
    let workers = options.workers.clamp(1, total);
    let write_options = options.write_options.clone().create_dirs(true);

    thread::scope(|s| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            let write_options = &write_options;
            s.spawn(move || work(dir, jobs, results, options, write_options));
        }
        drop(result_tx);

        for (done, outcome) in result_rx.iter().enumerate() {
            match outcome.result {
                Ok(()) => {
                    result.written += 1;
                    if outcome.fallback {
                        result.fallback_files.push(outcome.sop_instance_uid);
                    }
                }
                Err(e) => {
                    warn!(
                        "Failed to write {}: {}",
                        outcome.sop_instance_uid,
                        snafu::Report::from_error(&e)
                    );
                    result.failed += 1;
                    result.errors.insert(outcome.sop_instance_uid, e);
                }
            }
            if let Some(progress) = &options.on_progress {
                progress(done + 1, total);
            }
        }
    });
}

fn work(
    dir: &Path,
    jobs: Receiver<Arc<DataSet>>,
    results: Sender<Outcome>,
    options: &DirectoryWriteOptions,
    write_options: &WriteOptions,
) {
    for ds in jobs {
        let sop_instance_uid =
            trimmed(&ds, tags::SOP_INSTANCE_UID).unwrap_or_else(|| "unknown".to_string());
        let (fallback, result) = match output_path(dir, &ds, options) {
            Ok((path, fallback)) => {
                debug!("Writing {}", path.display());
                let written = write_file_with_options(&path, &ds, write_options)
                    .context(WriteSnafu { path });
                (fallback, written)
            }
            Err(e) => (false, Err(e)),
        };
        let outcome = Outcome {
            sop_instance_uid,
            fallback,
            result,
        };
        if results.send(outcome).is_err() {
            return;
        }
    }
}

/// Determine where a data set is written,
/// and whether that is the fallback location.
fn output_path(
    dir: &Path,
    ds: &DataSet,
    options: &DirectoryWriteOptions,
) -> Result<(PathBuf, bool), FileWriteError> {
    let sop_instance_uid = trimmed(ds, tags::SOP_INSTANCE_UID).context(MissingUidSnafu {
        tag: tags::SOP_INSTANCE_UID,
    })?;
    let file_name = format!("{}.dcm", sanitize(&sop_instance_uid));
    if !options.hierarchical {
        return Ok((dir.join(file_name), false));
    }

    match hierarchy(ds, options) {
        Ok(components) => {
            let mut path = dir.to_path_buf();
            path.extend(components);
            path.push(file_name);
            Ok((path, false))
        }
        Err(_) if options.fallback_flat => Ok((dir.join(FALLBACK_DIR).join(file_name), true)),
        Err(e) => Err(e),
    }
}

/// The patient, study and series folder names.
fn hierarchy(ds: &DataSet, options: &DirectoryWriteOptions) -> Result<[String; 3], FileWriteError> {
    let study = trimmed(ds, tags::STUDY_INSTANCE_UID).context(MissingUidSnafu {
        tag: tags::STUDY_INSTANCE_UID,
    })?;
    let series = trimmed(ds, tags::SERIES_INSTANCE_UID).context(MissingUidSnafu {
        tag: tags::SERIES_INSTANCE_UID,
    })?;
    let patient = (options.patient_folder)(ds)
        .map(|name| sanitize(&name))
        .filter(|name| !name.is_empty())
        .context(MissingPatientFolderSnafu)?;
    Ok([patient, sanitize(&study), sanitize(&series)])
}

fn trimmed(ds: &DataSet, tag: Tag) -> Option<String> {
    ds.string(tag)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Make a string safe to use as a single path component.
///
/// Path separators and characters reserved on common file systems
/// are replaced with underscores,
/// leading and trailing spaces and dots are removed,
/// and the result is truncated to 200 characters.
pub fn sanitize(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    replaced
        .trim_matches(|c| c == ' ' || c == '.')
        .chars()
        .take(MAX_COMPONENT_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;

    fn instance(sop: &str) -> DataSet {
        let mut ds = DataSet::new();
        ds.set_string(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7")
            .unwrap();
        ds.set_string(tags::SOP_INSTANCE_UID, VR::UI, sop).unwrap();
        ds.set_study_instance_uid("1.2.3.1000").unwrap();
        ds.set_series_instance_uid("1.2.3.100").unwrap();
        ds.set_patient_id("PAT/001").unwrap();
        ds
    }

    #[test]
    fn sanitize_components() {
        assert_eq!(sanitize("a/b\\c:d*e?f\"g<h>i|j"), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize(" ..name.. "), "name");
        assert_eq!(sanitize(&"x".repeat(300)).len(), 200);
        assert_eq!(sanitize("1.2.3"), "1.2.3");
    }

    #[test]
    fn default_patient_folder_falls_back_to_study() {
        let mut ds = instance("1.2.3.1");
        assert_eq!(default_patient_folder(&ds).as_deref(), Some("PAT_001"));
        ds.set_patient_id("  ").unwrap();
        assert_eq!(default_patient_folder(&ds).as_deref(), Some("1.2.3.1000"));
        ds.take(tags::STUDY_INSTANCE_UID);
        assert_eq!(default_patient_folder(&ds), None);
    }

    #[test]
    fn flat_and_hierarchical_paths() {
        let dir = Path::new("out");
        let ds = instance("1.2.3.1");

        let flat = DirectoryWriteOptions::new();
        assert_eq!(
            output_path(dir, &ds, &flat).unwrap(),
            (PathBuf::from("out/1.2.3.1.dcm"), false)
        );

        let nested = DirectoryWriteOptions::new().hierarchical(true);
        assert_eq!(
            output_path(dir, &ds, &nested).unwrap(),
            (
                PathBuf::from("out/PAT_001/1.2.3.1000/1.2.3.100/1.2.3.1.dcm"),
                false
            )
        );

        let custom = nested.clone().patient_folder(|_| Some("Doe:John".into()));
        assert_eq!(
            output_path(dir, &ds, &custom).unwrap().0,
            PathBuf::from("out/Doe_John/1.2.3.1000/1.2.3.100/1.2.3.1.dcm")
        );
    }

    #[test]
    fn fallback_when_series_is_missing() {
        let dir = Path::new("out");
        let mut ds = instance("1.2.3.1");
        ds.take(tags::SERIES_INSTANCE_UID);

        let options = DirectoryWriteOptions::new().hierarchical(true);
        assert_eq!(
            output_path(dir, &ds, &options).unwrap(),
            (PathBuf::from("out/_flat/1.2.3.1.dcm"), true)
        );

        let strict = options.fallback_flat(false);
        assert!(matches!(
            output_path(dir, &ds, &strict),
            Err(FileWriteError::MissingUid { tag, .. }) if tag == tags::SERIES_INSTANCE_UID
        ));
    }

    #[test]
    fn missing_sop_instance_uid_is_never_written() {
        let mut ds = instance("1.2.3.1");
        ds.take(tags::SOP_INSTANCE_UID);
        let options = DirectoryWriteOptions::new().hierarchical(true);
        assert!(output_path(Path::new("out"), &ds, &options).is_err());
    }

    #[test]
    fn write_flat_directory() {
        let dir = tempfile::tempdir().unwrap();
        let collection =
            DataSetCollection::from_datasets(vec![instance("1.2.3.1"), instance("1.2.3.2")])
                .unwrap();
        let result = write_directory(dir.path(), &collection);
        assert_eq!(result.written, 2);
        assert_eq!(result.failed, 0);
        assert!(result.fallback_files.is_empty());
        assert!(dir.path().join("1.2.3.1.dcm").is_file());
        assert!(dir.path().join("1.2.3.2.dcm").is_file());

        // no overwrite by default
        let again = write_directory(dir.path(), &collection);
        assert_eq!(again.written, 0);
        assert_eq!(again.failed, 2);
        assert!(again.errors.contains_key("1.2.3.1"));
    }

    #[test]
    fn progress_is_reported_per_file() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let dir = tempfile::tempdir().unwrap();
        let collection = DataSetCollection::from_datasets(
            (1..=5).map(|i| instance(&format!("1.2.3.{}", i))),
        )
        .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let options = DirectoryWriteOptions::new()
            .workers(3)
            .on_progress(move |done, total| {
                assert!(done <= total);
                seen.fetch_add(1, Ordering::SeqCst);
            });
        let result = write_directory_with_options(dir.path(), &collection, &options);
        assert_eq!(result.written, 5);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }
}
