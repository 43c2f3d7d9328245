//! This crate implements the standard DICOM dictionaries and constants
//! used throughout dcmkit.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: information about the DICOM attributes
//!   handled by this library, according to [DICOM PS3.6].
//!   It is used by default by the parser (to resolve implicit VRs)
//!   and when displaying data sets.
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for transfer syntaxes and common SOP classes
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
