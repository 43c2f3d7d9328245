#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains a high-level abstraction for reading, writing
//! and organizing DICOM data sets.
//!
//! A [`DataSet`] is a map of data elements sorted by tag.
//! Loading a DICOM file can be done via the function [`open_file`],
//! and [`ReadOptions`] provides additional file reading options.
//! Data sets are written back with [`write_file`] or [`write_file_with_options`].
//!
//! # Examples
//!
//! Read a file and fetch some attributes:
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let ds = open_file("0001.dcm")?;
//!
//! let patient_name = ds.string(tags::PATIENT_NAME);
//! let modality = ds.get_by_keyword("Modality")?.map(|e| e.value().to_str());
//! # Ok(())
//! # }
//! ```
//!
//! Whole directories are ingested in parallel
//! into an indexed [`DataSetCollection`]:
//!
//! ```no_run
//! use dcmkit_object::{parse_directory_with_options, ParseDirectoryOptions};
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ParseDirectoryOptions::new().workers(4).recursive(false);
//! let result = parse_directory_with_options("incoming", &options)?;
//! println!("{} parsed, {} failed", result.parsed, result.failed);
//!
//! for ds in result.collection.get_by_study_instance_uid("1.2.3.4") {
//!     println!("{}", ds);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Collections are written back with [`write_directory`],
//! either flat or in a patient/study/series hierarchy:
//!
//! ```no_run
//! # use dcmkit_object::{DataSetCollection, DirectoryWriteOptions};
//! # fn foo(collection: &DataSetCollection) {
//! let options = DirectoryWriteOptions::new().hierarchical(true);
//! let result = dcmkit_object::write_directory_with_options("out", collection, &options);
//! assert_eq!(result.failed, 0);
//! # }
//! ```

pub mod collection;
pub mod dataset;
pub mod dir;
pub mod dir_write;
pub mod file;
pub mod write;

pub use crate::collection::{CollectionError, DataSetCollection};
pub use crate::dataset::{DataSet, WalkAction, WalkSummary};
pub use crate::dir::{
    parse_directory, parse_directory_with_options, Cancellation, DirectoryError, IngestError,
    ParseDirectoryOptions, ParseResult,
};
pub use crate::dir_write::{
    write_directory, write_directory_with_options, DirectoryWriteOptions, DirectoryWriteResult,
    FileNaming, FileWriteError,
};
pub use crate::file::{open_file, read_from, ReadError, ReadOptions};
pub use crate::write::{write_file, write_file_with_options, write_to, WriteError, WriteOptions};

pub use dcmkit_core::{DataElement, Tag, Value, VR};
pub use dcmkit_dictionary_std::StandardDataDictionary;
