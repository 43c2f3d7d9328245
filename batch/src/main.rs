//! Batch processing of DICOM directories.
//!
//! Ingests every matching file under a directory,
//! prints a summary per study and series,
//! and optionally de-identifies the data sets
//! and writes them to an output directory.
use clap::Parser;
use dcmkit_anonymize::{Anonymizer, Profile};
use dcmkit_dictionary_std::tags;
use dcmkit_object::{
    parse_directory_with_options, write_directory_with_options, CollectionError, DataSet,
    DataSetCollection, DirectoryError, DirectoryWriteOptions, ParseDirectoryOptions, WriteOptions,
};
use indicatif::{ProgressBar, ProgressStyle};
use snafu::prelude::*;
use snafu::{Report, Whatever};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn, Level};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// DICOM batch processor
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// the directory to ingest
    input: PathBuf,
    /// the directory to write the processed files to
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    /// de-identify every data set with the given profile
    /// (basic, clean, retain-uids, retain-device-identity)
    #[arg(long = "anonymize", value_name = "PROFILE")]
    anonymize: Option<Profile>,
    /// write files as patient/study/series/instance.dcm
    #[arg(long = "hierarchical")]
    hierarchical: bool,
    /// number of worker threads [default: number of CPUs]
    #[arg(short = 'w', long = "workers")]
    workers: Option<usize>,
    /// file name pattern of the files to ingest
    #[arg(long = "pattern", default_value = "*.dcm")]
    pattern: String,
    /// only ingest files directly inside the input directory
    #[arg(long = "no-recursive")]
    no_recursive: bool,
    /// stop at the first file which cannot be ingested
    #[arg(long = "fail-fast")]
    fail_fast: bool,
    /// replace files already present in the output directory
    #[arg(long = "overwrite")]
    overwrite: bool,
    /// verbose mode
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    /// Could not ingest the input directory
    Ingest { source: DirectoryError },

    /// Could not de-identify {sop_instance_uid}
    Anonymize {
        sop_instance_uid: String,
        source: dcmkit_anonymize::Error,
    },

    /// Could not collect de-identified data sets
    Collect { source: CollectionError },
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", Report::from_error(e));
            std::process::exit(-2);
        }
    }
}

/// Returns whether every file was processed.
fn run() -> Result<bool, Error> {
    let App {
        input,
        output,
        anonymize,
        hierarchical,
        workers,
        pattern,
        no_recursive,
        fail_fast,
        overwrite,
        verbose,
    } = App::parse();

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::from_level(level).into())
                    .from_env_lossy(),
            )
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let progress_bar = if verbose { None } else { Some(new_progress_bar()) };

    let mut ingest_options = ParseDirectoryOptions::new()
        .recursive(!no_recursive)
        .pattern(pattern)
        .fail_fast(fail_fast);
    if let Some(workers) = workers {
        ingest_options = ingest_options.workers(workers);
    }
    if let Some(pb) = &progress_bar {
        let pb = pb.clone();
        ingest_options = ingest_options.on_progress(move |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        });
    }

    let ingested = parse_directory_with_options(&input, &ingest_options).context(IngestSnafu)?;
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }
    let mut complete = ingested.failed == 0 && ingested.parsed == ingested.discovered;
    for (path, e) in &ingested.errors {
        warn!("{}: {}", path.display(), Report::from_error(e));
    }
    info!(
        "Ingested {} of {} files in {:?} ({} failed)",
        ingested.parsed, ingested.discovered, ingested.duration, ingested.failed
    );

    print_summary(&summarize(&ingested.collection));

    let output = match output {
        Some(output) => output,
        None => return Ok(complete),
    };

    let collection = match anonymize {
        Some(profile) => {
            info!("De-identifying with profile {}", profile);
            deidentify(&ingested.collection, &Anonymizer::new(profile))?
        }
        None => ingested.collection,
    };

    let mut write_options = DirectoryWriteOptions::new()
        .hierarchical(hierarchical)
        .write_options(WriteOptions::new().overwrite(overwrite));
    if let Some(workers) = workers {
        write_options = write_options.workers(workers);
    }
    let progress_bar = if verbose { None } else { Some(new_progress_bar()) };
    if let Some(pb) = &progress_bar {
        let pb = pb.clone();
        write_options = write_options.on_progress(move |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        });
    }

    let written = write_directory_with_options(&output, &collection, &write_options);
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }
    let mut failures: Vec<_> = written.errors.iter().collect();
    failures.sort_by(|a, b| a.0.cmp(b.0));
    for (uid, e) in failures {
        warn!("{}: {}", uid, Report::from_error(e));
    }
    for uid in &written.fallback_files {
        warn!("{} written to the flat fallback directory", uid);
    }
    info!(
        "Wrote {} files to {} in {:?} ({} failed)",
        written.written,
        output.display(),
        written.duration,
        written.failed
    );
    complete &= written.failed == 0;
    Ok(complete)
}

fn new_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40} {pos}/{len}")
    {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::new(0, 480_000_000));
    pb
}

fn deidentify(
    collection: &DataSetCollection,
    anonymizer: &Anonymizer,
) -> Result<DataSetCollection, Error> {
    let anonymized = collection
        .datasets()
        .iter()
        .map(|ds| {
            anonymizer
                .anonymize(ds)
                .map(Arc::new)
                .with_context(|_| AnonymizeSnafu {
                    sop_instance_uid: ds.string(tags::SOP_INSTANCE_UID).unwrap_or_default(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    DataSetCollection::from_datasets(anonymized).context(CollectSnafu)
}

#[derive(Debug, Default, PartialEq)]
struct SeriesSummary {
    series_number: Option<String>,
    modality: Option<String>,
    instances: usize,
}

#[derive(Debug, Default, PartialEq)]
struct StudySummary {
    patient_id: Option<String>,
    series: BTreeMap<String, SeriesSummary>,
}

/// Instance counts per study and series instance UID.
fn summarize(collection: &DataSetCollection) -> BTreeMap<String, StudySummary> {
    let mut studies: BTreeMap<String, StudySummary> = BTreeMap::new();
    for ds in collection.datasets() {
        let study = studies.entry(text(&ds, tags::STUDY_INSTANCE_UID)).or_default();
        if study.patient_id.is_none() {
            study.patient_id = non_empty(&ds, tags::PATIENT_ID);
        }
        let series = study
            .series
            .entry(text(&ds, tags::SERIES_INSTANCE_UID))
            .or_default();
        if series.series_number.is_none() {
            series.series_number = ds
                .get(tags::SERIES_NUMBER)
                .map(|e| e.value().to_str().trim().to_string())
                .filter(|s| !s.is_empty());
        }
        if series.modality.is_none() {
            series.modality = non_empty(&ds, tags::MODALITY);
        }
        series.instances += 1;
    }
    studies
}

fn text(ds: &DataSet, tag: dcmkit_object::Tag) -> String {
    ds.string(tag).map(str::trim).unwrap_or_default().to_string()
}

fn non_empty(ds: &DataSet, tag: dcmkit_object::Tag) -> Option<String> {
    Some(text(ds, tag)).filter(|s| !s.is_empty())
}

fn print_summary(studies: &BTreeMap<String, StudySummary>) {
    for (study_uid, study) in studies {
        let instances: usize = study.series.values().map(|s| s.instances).sum();
        println!(
            "Study {} (patient {}): {} series, {} instances",
            or_unknown(study_uid),
            study.patient_id.as_deref().unwrap_or("?"),
            study.series.len(),
            instances
        );
        for (series_uid, series) in &study.series {
            println!(
                "  Series {} #{} [{}]: {} instances",
                or_unknown(series_uid),
                series.series_number.as_deref().unwrap_or("?"),
                series.modality.as_deref().unwrap_or("?"),
                series.instances
            );
        }
    }
}

fn or_unknown(uid: &str) -> &str {
    if uid.is_empty() {
        "<unknown>"
    } else {
        uid
    }
}
