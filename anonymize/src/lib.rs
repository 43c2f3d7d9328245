#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! De-identification of DICOM data sets
//! following the confidentiality profiles of DICOM PS3.15 Annex E.
//!
//! An [`Anonymizer`] holds a table of [actions](Action) by attribute tag,
//! built from a [`Profile`] and refined by [`Options`]
//! and custom per-tag overrides.
//! Anonymizing never modifies the input data set.
//!
//! # Example
//!
//! ```
//! use dcmkit_anonymize::{Anonymizer, Profile};
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::DataSet;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ds = DataSet::new();
//! ds.set_patient_name("Doe^John")?;
//! ds.set_patient_birth_date("19750315")?;
//!
//! let anonymizer = Anonymizer::new(Profile::Basic);
//! let anonymized = anonymizer.anonymize(&ds)?;
//! assert_eq!(anonymized.string(tags::PATIENT_NAME), Some("ANONYMOUS"));
//! assert_eq!(anonymized.string(tags::PATIENT_BIRTH_DATE), None);
//! assert_eq!(ds.string(tags::PATIENT_NAME), Some("Doe^John"));
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod profile;

pub use crate::profile::{Action, ParseProfileError, Profile};

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use dcmkit_core::element::VrMismatchError;
use dcmkit_core::uid;
use dcmkit_core::value::ValueError;
use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_object::dataset::Error as DataSetError;
use dcmkit_object::{DataSet, WalkAction};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The error type of a callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A caller supplied action for an attribute.
///
/// Returning `None` removes the element,
/// otherwise the value of the returned element replaces the original.
pub type Callback = dyn Fn(&DataElement) -> Result<Option<DataElement>, BoxError> + Send + Sync;

/// An error which may occur during de-identification.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not build replacement value for {}", tag))]
    InvalidValue { tag: Tag, source: ValueError },
    #[snafu(display("Could not replace value of {}", tag))]
    ReplaceValue { tag: Tag, source: VrMismatchError },
    #[snafu(display("Cannot generate a UID for {} of VR {}", tag, vr))]
    NotUid {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    #[snafu(display("No callback for {}", tag))]
    MissingCallback { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Callback for {} failed", tag))]
    Callback { tag: Tag, source: BoxError },
    #[snafu(display("Cannot shift date `{}` of {}", value, tag))]
    ShiftDate {
        tag: Tag,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Action {:?} for {} is not supported", action, tag))]
    Unsupported {
        action: Action,
        tag: Tag,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not regenerate instance UIDs"))]
    RegenerateUids { source: DataSetError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options refining the actions of a profile.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    /// Keep the study, series and SOP instance UIDs.
    pub retain_uids: bool,
    /// Keep institution, department, station and device serial number.
    pub retain_device_identity: bool,
    /// Keep patient age, sex, size and weight.
    pub retain_patient_characteristics: bool,
    /// Route study, series, acquisition and content dates and times
    /// through callbacks instead of emptying them.
    pub retain_longitudinal_temporal_info: bool,
    /// Shift applied to dates and date-times
    /// routed to a callback when none is registered for the tag.
    pub date_offset: Option<Duration>,
    /// Burned-in annotations are expected to be removed.
    /// Pixel data is never altered by this crate.
    pub clean_pixel_data: bool,
    /// Clean free-text descriptions instead of removing them.
    pub clean_descriptors: bool,
    /// Remove every private attribute not named in the action table.
    pub remove_private_tags: bool,
    /// Remove overlay groups (6000-60FF).
    pub remove_overlays: bool,
    /// Remove curve groups (5000-50FF).
    pub remove_curves: bool,
}

impl Options {
    /// The default options of a profile.
    pub fn for_profile(profile: Profile) -> Self {
        let base = Options {
            remove_private_tags: true,
            ..Options::default()
        };
        match profile {
            Profile::Basic => base,
            Profile::Clean => Options {
                clean_pixel_data: true,
                clean_descriptors: true,
                ..base
            },
            Profile::RetainUids => Options {
                retain_uids: true,
                ..base
            },
            Profile::RetainDeviceIdentity => Options {
                retain_device_identity: true,
                ..base
            },
            Profile::Custom => Options::default(),
        }
    }
}

/// The complete configuration of an [`Anonymizer`].
#[derive(Clone)]
pub struct Config {
    pub profile: Profile,
    pub options: Options,
    /// Replacement Patient's Name. `ANONYMOUS` by default.
    pub patient_name: String,
    /// Replacement Patient ID.
    /// `ANON` followed by the current Unix time in seconds by default.
    pub patient_id: String,
    /// Replacement Institution Name, empty by default.
    pub institution_name: String,
    /// Actions taking precedence over the profile table.
    pub custom_actions: HashMap<Tag, Action>,
    callbacks: HashMap<Tag, Arc<Callback>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut callbacks: Vec<_> = self.callbacks.keys().collect();
        callbacks.sort();
        f.debug_struct("Config")
            .field("profile", &self.profile)
            .field("options", &self.options)
            .field("patient_name", &self.patient_name)
            .field("patient_id", &self.patient_id)
            .field("institution_name", &self.institution_name)
            .field("custom_actions", &self.custom_actions)
            .field("callbacks", &callbacks)
            .finish()
    }
}

impl Config {
    /// The default configuration of a profile.
    pub fn new(profile: Profile) -> Self {
        Config {
            profile,
            options: Options::for_profile(profile),
            patient_name: "ANONYMOUS".to_string(),
            patient_id: format!("ANON{}", Utc::now().timestamp()),
            institution_name: String::new(),
            custom_actions: HashMap::new(),
            callbacks: HashMap::new(),
        }
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    pub fn patient_id(mut self, id: impl Into<String>) -> Self {
        self.patient_id = id.into();
        self
    }

    pub fn institution_name(mut self, name: impl Into<String>) -> Self {
        self.institution_name = name.into();
        self
    }

    /// Override the action for a tag.
    pub fn action(mut self, tag: Tag, action: Action) -> Self {
        self.custom_actions.insert(tag, action);
        self
    }

    /// Register the function applied to a tag
    /// whose action is [`Action::Callback`].
    pub fn callback<F>(mut self, tag: Tag, f: F) -> Self
    where
        F: Fn(&DataElement) -> Result<Option<DataElement>, BoxError> + Send + Sync + 'static,
    {
        self.callbacks.insert(tag, Arc::new(f));
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Profile::default())
    }
}

/// A de-identification engine.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    config: Config,
    actions: HashMap<Tag, Action>,
}

impl Anonymizer {
    /// Create an anonymizer with the default configuration of a profile.
    pub fn new(profile: Profile) -> Self {
        Anonymizer::with_config(Config::new(profile))
    }

    /// Create an anonymizer from a full configuration.
    pub fn with_config(config: Config) -> Self {
        let mut actions = config.profile.actions(&config.options);
        actions.extend(&config.custom_actions);
        Anonymizer { config, actions }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The action for a tag, if the table names it.
    ///
    /// Private tags which are not named
    /// follow the `remove_private_tags` option instead.
    pub fn action_for(&self, tag: Tag) -> Option<Action> {
        self.actions.get(&tag).copied()
    }

    /// Produce a de-identified copy of a data set.
    pub fn anonymize(&self, ds: &DataSet) -> Result<DataSet> {
        let mut out = ds.clone();
        let summary = out.walk_modify(|elem| self.visit(elem))?;

        let options = &self.config.options;
        let mut removed = summary.removed;
        if options.remove_overlays {
            removed += out.remove_group(0x6000);
        }
        if options.remove_curves {
            removed += out.remove_group(0x5000);
        }
        if !options.retain_uids {
            out.generate_new_uids().context(RegenerateUidsSnafu)?;
        }
        if options.clean_pixel_data && out.contains(tags::PIXEL_DATA) {
            debug!("Pixel data left as is, burned-in annotations are not cleaned");
        }
        debug!(
            "Anonymized {} elements: {} modified, {} removed",
            summary.visited, summary.modified, removed
        );
        Ok(out)
    }

    fn visit(&self, elem: &mut DataElement) -> Result<WalkAction> {
        let tag = elem.tag();
        match self.actions.get(&tag) {
            Some(&action) => self.apply(elem, action),
            None if tag.is_private() && self.config.options.remove_private_tags => {
                Ok(WalkAction::Remove)
            }
            None => Ok(WalkAction::Keep),
        }
    }

    fn apply(&self, elem: &mut DataElement, action: Action) -> Result<WalkAction> {
        let tag = elem.tag();
        match action {
            Action::Keep => Ok(WalkAction::Keep),
            Action::Remove => Ok(WalkAction::Remove),
            Action::Empty => replace(elem, Value::empty(elem.vr())),
            Action::Dummy => {
                let value = self.dummy_value(elem)?;
                replace(elem, value)
            }
            Action::Clean => match elem.vr() {
                VR::LT | VR::ST | VR::UT => {
                    let cleaned = clean_text(&elem.value().to_str());
                    let value = text_value(tag, elem.vr(), &cleaned)?;
                    replace(elem, value)
                }
                _ => {
                    let value = self.dummy_value(elem)?;
                    replace(elem, value)
                }
            },
            Action::NewUid => {
                ensure!(
                    elem.vr() == VR::UI,
                    NotUidSnafu { tag, vr: elem.vr() }
                );
                replace(elem, text_value(tag, VR::UI, &uid::generate())?)
            }
            Action::Hash => {
                let hashed = format!("HASH_{}", digest(&elem.value().to_str()));
                let value = text_value(tag, elem.vr(), &hashed)?;
                replace(elem, value)
            }
            Action::Encrypt => UnsupportedSnafu { action, tag }.fail(),
            Action::Callback => self.callback(elem),
        }
    }

    fn callback(&self, elem: &mut DataElement) -> Result<WalkAction> {
        let tag = elem.tag();
        if let Some(f) = self.config.callbacks.get(&tag) {
            return match f(elem).context(CallbackSnafu { tag })? {
                None => Ok(WalkAction::Remove),
                Some(new) => replace(elem, new.into_value()),
            };
        }
        let offset = self
            .config
            .options
            .date_offset
            .context(MissingCallbackSnafu { tag })?;
        match elem.vr() {
            vr @ VR::DA | vr @ VR::DT => {
                let shifted = elem
                    .value()
                    .strings()
                    .unwrap_or_default()
                    .iter()
                    .map(|s| {
                        shift_date(s, vr, offset).with_context(|| ShiftDateSnafu {
                            tag,
                            value: s.as_str(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let value = if shifted.iter().all(String::is_empty) {
                    Value::empty(vr)
                } else {
                    Value::strs(vr, shifted).context(InvalidValueSnafu { tag })?
                };
                replace(elem, value)
            }
            // times carry no date to shift
            _ => Ok(WalkAction::Keep),
        }
    }

    fn dummy_value(&self, elem: &DataElement) -> Result<Value> {
        let tag = elem.tag();
        let vr = elem.vr();
        let text = match tag {
            tags::PATIENT_NAME => self.config.patient_name.as_str(),
            tags::PATIENT_ID => self.config.patient_id.as_str(),
            tags::INSTITUTION_NAME => self.config.institution_name.as_str(),
            tags::PATIENT_IDENTITY_REMOVED => "YES",
            _ => match vr {
                VR::PN => "ANONYMOUS",
                VR::DA => "19000101",
                VR::TM => "000000",
                VR::DT => "19000101000000",
                VR::AS => "000Y",
                VR::LO | VR::SH => "REMOVED",
                _ => "",
            },
        };
        text_value(tag, vr, text)
    }
}

fn replace(elem: &mut DataElement, value: Value) -> Result<WalkAction> {
    let tag = elem.tag();
    elem.set_value(value).context(ReplaceValueSnafu { tag })?;
    Ok(WalkAction::Modified)
}

/// A single string value, or the empty value for an empty string.
fn text_value(tag: Tag, vr: VR, text: &str) -> Result<Value> {
    if text.is_empty() {
        return Ok(Value::empty(vr));
    }
    Value::str(vr, text).context(InvalidValueSnafu { tag })
}

/// Strip a few identifying patterns from free text.
fn clean_text(text: &str) -> String {
    if text.contains('@') {
        return "CLEANED_TEXT".to_string();
    }
    text.replace("phone:", "REMOVED")
}

/// A stable, non-cryptographic digest of a string.
fn digest(text: &str) -> u32 {
    text.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Shift a DA or DT string by the given offset.
///
/// A DT value of partial precision (down to `YYYYMMDD`)
/// is shifted as if its missing components were zero,
/// and keeps its precision, fractional seconds and UTC offset suffix.
fn shift_date(text: &str, vr: VR, offset: Duration) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return Some(String::new());
    }
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let (head, rest) = text.split_at(digits);
    match vr {
        VR::DA if digits == 8 && rest.is_empty() => {
            let date = NaiveDate::parse_from_str(head, "%Y%m%d").ok()?;
            let shifted = date.checked_add_signed(offset)?;
            Some(shifted.format("%Y%m%d").to_string())
        }
        VR::DT if matches!(digits, 8 | 10 | 12 | 14) => {
            let padded = format!("{:0<14}", head);
            let dt = NaiveDateTime::parse_from_str(&padded, "%Y%m%d%H%M%S").ok()?;
            let shifted = dt
                .checked_add_signed(offset)?
                .format("%Y%m%d%H%M%S")
                .to_string();
            Some(format!("{}{}", &shifted[..digits], rest))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let mut ds = DataSet::new();
        ds.set_patient_name("Smith^John").unwrap();
        ds.set_patient_id("PAT123").unwrap();
        ds.set_patient_birth_date("19750315").unwrap();
        ds.set_patient_sex("M").unwrap();
        ds.set_patient_age("045Y").unwrap();
        ds.set_string(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2")
            .unwrap();
        ds.set_sop_instance_uid("1.2.3.4.5").unwrap();
        ds.set_study_instance_uid("1.2.3.4.6").unwrap();
        ds.set_series_instance_uid("1.2.3.4.7").unwrap();
        ds.set_string(tags::MODALITY, VR::CS, "CT").unwrap();
        ds.set_string(tags::STUDY_DATE, VR::DA, "20240131").unwrap();
        ds.set_string(tags::STUDY_TIME, VR::TM, "101530").unwrap();
        ds.set_string(tags::INSTITUTION_NAME, VR::LO, "General Hospital")
            .unwrap();
        ds.set_string(tags::STATION_NAME, VR::SH, "CT01").unwrap();
        ds.set_string(tags::STUDY_DESCRIPTION, VR::LO, "Chest CT")
            .unwrap();
        ds
    }

    #[test]
    fn dummy_values_by_vr() {
        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Custom)
                .action(tags::PATIENT_NAME, Action::Dummy)
                .action(tags::STUDY_DATE, Action::Dummy)
                .action(tags::STUDY_TIME, Action::Dummy)
                .action(tags::STUDY_DESCRIPTION, Action::Dummy)
                .action(tags::PATIENT_AGE, Action::Dummy)
                .action(tags::MODALITY, Action::Dummy)
                .patient_name("SUBJECT^01"),
        );
        let out = anonymizer.anonymize(&sample()).unwrap();
        assert_eq!(out.string(tags::PATIENT_NAME), Some("SUBJECT^01"));
        assert_eq!(out.string(tags::STUDY_DATE), Some("19000101"));
        assert_eq!(out.string(tags::STUDY_TIME), Some("000000"));
        assert_eq!(out.string(tags::STUDY_DESCRIPTION), Some("REMOVED"));
        assert_eq!(out.string(tags::PATIENT_AGE), Some("000Y"));
        // no dummy for CS
        assert!(out.get(tags::MODALITY).unwrap().value().is_empty());
    }

    #[test]
    fn patient_identity_removed_is_yes() {
        let mut ds = sample();
        ds.set_string(tags::PATIENT_IDENTITY_REMOVED, VR::CS, "NO")
            .unwrap();
        let out = Anonymizer::new(Profile::Basic).anonymize(&ds).unwrap();
        assert_eq!(out.string(tags::PATIENT_IDENTITY_REMOVED), Some("YES"));
    }

    #[test]
    fn basic_profile_details() {
        let out = Anonymizer::new(Profile::Basic)
            .anonymize(&sample())
            .unwrap();
        // patient characteristics are emptied
        assert!(out.get(tags::PATIENT_SEX).unwrap().value().is_empty());
        assert!(out.get(tags::PATIENT_AGE).unwrap().value().is_empty());
        assert!(!out.contains(tags::INSTITUTION_NAME));
        assert_eq!(out.string(tags::STATION_NAME), Some("CT01"));
        assert_eq!(out.string(tags::STUDY_DESCRIPTION), Some("REMOVED"));
        assert_eq!(out.string(tags::MODALITY), Some("CT"));
        assert_eq!(out.get(tags::STUDY_DATE).unwrap().vr(), VR::DA);
        assert!(out.get(tags::STUDY_DATE).unwrap().value().is_empty());
    }

    #[test]
    fn retain_device_identity() {
        let out = Anonymizer::new(Profile::RetainDeviceIdentity)
            .anonymize(&sample())
            .unwrap();
        assert_eq!(out.string(tags::INSTITUTION_NAME), Some("General Hospital"));
    }

    #[test]
    fn retain_uids() {
        let ds = sample();
        let out = Anonymizer::new(Profile::RetainUids).anonymize(&ds).unwrap();
        for tag in [
            tags::STUDY_INSTANCE_UID,
            tags::SERIES_INSTANCE_UID,
            tags::SOP_INSTANCE_UID,
        ] {
            assert_eq!(out.string(tag), ds.string(tag));
        }
    }

    #[test]
    fn clean_free_text() {
        assert_eq!(clean_text("call phone: 555"), "call REMOVED 555");
        assert_eq!(clean_text("mail john@example.org"), "CLEANED_TEXT");
        assert_eq!(clean_text("no identifiers"), "no identifiers");

        let mut ds = sample();
        ds.set_string(tags::IMAGE_COMMENTS, VR::LT, "ask jdoe@example.org")
            .unwrap();
        let out = Anonymizer::new(Profile::Clean).anonymize(&ds).unwrap();
        assert_eq!(out.string(tags::IMAGE_COMMENTS), Some("CLEANED_TEXT"));
    }

    #[test]
    fn hash_is_stable() {
        assert_eq!(digest(""), 0);
        assert_eq!(digest("a"), 97);
        assert_eq!(digest("ab"), 97 * 31 + 98);

        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Custom).action(tags::PATIENT_ID, Action::Hash),
        );
        let first = anonymizer.anonymize(&sample()).unwrap();
        let second = anonymizer.anonymize(&sample()).unwrap();
        let hashed = first.string(tags::PATIENT_ID).unwrap();
        assert!(hashed.starts_with("HASH_"));
        assert_eq!(second.string(tags::PATIENT_ID), Some(hashed));
    }

    #[test]
    fn new_uid_requires_ui() {
        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Custom).action(tags::PATIENT_ID, Action::NewUid),
        );
        assert!(matches!(
            anonymizer.anonymize(&sample()),
            Err(Error::NotUid { .. })
        ));
    }

    #[test]
    fn encrypt_is_unsupported() {
        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Custom).action(tags::PATIENT_ID, Action::Encrypt),
        );
        assert!(matches!(
            anonymizer.anonymize(&sample()),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn callbacks() {
        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Custom)
                .action(tags::PATIENT_ID, Action::Callback)
                .action(tags::STATION_NAME, Action::Callback)
                .callback(tags::PATIENT_ID, |elem| {
                    let id = format!("X{}", elem.value().to_str());
                    Ok(Some(DataElement::from_value(
                        elem.tag(),
                        Value::str(VR::LO, id)?,
                    )))
                })
                .callback(tags::STATION_NAME, |_| Ok(None)),
        );
        let out = anonymizer.anonymize(&sample()).unwrap();
        assert_eq!(out.string(tags::PATIENT_ID), Some("XPAT123"));
        assert!(!out.contains(tags::STATION_NAME));

        let missing = Anonymizer::with_config(
            Config::new(Profile::Custom).action(tags::MODALITY, Action::Callback),
        );
        assert!(matches!(
            missing.anonymize(&sample()),
            Err(Error::MissingCallback { .. })
        ));
    }

    #[test]
    fn longitudinal_dates_are_shifted() {
        let options = Options {
            retain_longitudinal_temporal_info: true,
            date_offset: Some(Duration::days(-31)),
            ..Options::for_profile(Profile::Basic)
        };
        let anonymizer = Anonymizer::with_config(Config::new(Profile::Basic).options(options));
        let mut ds = sample();
        ds.set_string(
            tags::ACQUISITION_DATE_TIME,
            VR::DT,
            "20240131101530.25+0100",
        )
        .unwrap();
        let out = anonymizer.anonymize(&ds).unwrap();
        assert_eq!(out.string(tags::STUDY_DATE), Some("20231231"));
        assert_eq!(out.string(tags::STUDY_TIME), Some("101530"));
        assert_eq!(
            out.string(tags::ACQUISITION_DATE_TIME),
            Some("20231231101530.25+0100")
        );
    }

    #[test]
    fn shift_date_forms() {
        let day = Duration::days(1);
        assert_eq!(shift_date("20241231", VR::DA, day).as_deref(), Some("20250101"));
        assert_eq!(shift_date("", VR::DA, day).as_deref(), Some(""));
        assert_eq!(shift_date("2024123", VR::DA, day), None);
        assert_eq!(shift_date("not-a-date", VR::DA, day), None);
        assert_eq!(
            shift_date("20240229", VR::DT, day).as_deref(),
            Some("20240301")
        );
        assert_eq!(
            shift_date("20240229235959", VR::DT, Duration::seconds(1)).as_deref(),
            Some("20240301000000")
        );
        assert_eq!(shift_date("202402292", VR::DT, day), None);
        assert_eq!(shift_date("20240229", VR::DA, Duration::hours(36)).as_deref(), Some("20240301"));

        // partial precision keeps sub-day offsets
        assert_eq!(
            shift_date("2024013110", VR::DT, Duration::minutes(90)).as_deref(),
            Some("2024013111")
        );
        assert_eq!(
            shift_date("2024013110+0100", VR::DT, Duration::hours(-11)).as_deref(),
            Some("2024013023+0100")
        );
        assert_eq!(
            shift_date("202401312345", VR::DT, Duration::minutes(30)).as_deref(),
            Some("202402010015")
        );
    }

    #[test]
    fn overlays_and_curves() {
        let mut ds = sample();
        ds.put(DataElement::from_value(
            tags::OVERLAY_DATA,
            Value::bytes(VR::OW, vec![0; 4]).unwrap(),
        ));
        ds.put(DataElement::from_value(
            Tag(0x6002, 0x0010),
            Value::ints(VR::US, [512]).unwrap(),
        ));
        ds.put(DataElement::from_value(
            Tag(0x5000, 0x0005),
            Value::ints(VR::US, [1]).unwrap(),
        ));

        let keep = Anonymizer::new(Profile::Basic).anonymize(&ds).unwrap();
        assert!(keep.contains(tags::OVERLAY_DATA));

        let options = Options {
            remove_overlays: true,
            remove_curves: true,
            ..Options::for_profile(Profile::Basic)
        };
        let out = Anonymizer::with_config(Config::new(Profile::Basic).options(options))
            .anonymize(&ds)
            .unwrap();
        assert!(!out.contains(tags::OVERLAY_DATA));
        assert!(!out.contains(Tag(0x6002, 0x0010)));
        assert!(!out.contains(Tag(0x5000, 0x0005)));
    }

    #[test]
    fn custom_actions_take_precedence() {
        let anonymizer = Anonymizer::with_config(
            Config::new(Profile::Basic).action(tags::PATIENT_NAME, Action::Keep),
        );
        assert_eq!(anonymizer.action_for(tags::PATIENT_NAME), Some(Action::Keep));
        assert_eq!(anonymizer.action_for(tags::PATIENT_ID), Some(Action::Dummy));
        assert_eq!(anonymizer.action_for(tags::MODALITY), None);
        let out = anonymizer.anonymize(&sample()).unwrap();
        assert_eq!(out.string(tags::PATIENT_NAME), Some("Smith^John"));
    }
}
