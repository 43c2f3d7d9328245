//! De-identification profiles and their attribute action tables,
//! after DICOM PS3.15 Annex E.

use crate::Options;
use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;
use snafu::{Backtrace, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The action applied to an attribute,
/// named after the codes of PS3.15 Table E.1-1 where applicable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// K: keep the attribute unchanged.
    Keep,
    /// X: remove the attribute.
    Remove,
    /// Z: replace with a zero length value.
    Empty,
    /// D: replace with a dummy value of the same VR.
    Dummy,
    /// C: replace with a value of similar meaning
    /// which does not identify the patient.
    Clean,
    /// U: replace with a new UID.
    NewUid,
    /// Replace with a stable digest of the original value.
    Hash,
    /// Encrypt the original value. Not supported.
    Encrypt,
    /// Delegate to a caller supplied function.
    Callback,
}

/// A de-identification profile.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Basic Application Level Confidentiality Profile.
    #[default]
    Basic,
    /// Basic, with the Clean Pixel Data and Clean Descriptors options.
    Clean,
    /// Basic, keeping the original UIDs.
    RetainUids,
    /// Basic, keeping device and institution identity.
    RetainDeviceIdentity,
    /// No predefined actions.
    /// Only the custom actions of the configuration apply.
    Custom,
}

/// An error returned when parsing an unknown profile name.
#[derive(Debug, Snafu)]
#[snafu(display("Unknown profile `{}`", name))]
pub struct ParseProfileError {
    name: String,
    backtrace: Backtrace,
}

impl Profile {
    /// The profile name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Profile::Basic => "basic",
            Profile::Clean => "clean",
            Profile::RetainUids => "retain-uids",
            Profile::RetainDeviceIdentity => "retain-device-identity",
            Profile::Custom => "custom",
        }
    }

    /// The action table of this profile under the given options.
    pub fn actions(self, options: &Options) -> HashMap<Tag, Action> {
        match self {
            Profile::Custom => HashMap::new(),
            _ => basic_actions(options),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Profile::Basic,
            Profile::Clean,
            Profile::RetainUids,
            Profile::RetainDeviceIdentity,
            Profile::Custom,
        ]
        .iter()
        .copied()
        .find(|p| p.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| ParseProfileSnafu { name: s }.build())
    }
}

use Action::*;

/// The Basic profile subset of PS3.15 Table E.1-1.
#[rustfmt::skip]
const BASIC: &[(Tag, Action)] = &[
    // patient
    (tags::PATIENT_NAME, Dummy),
    (tags::PATIENT_ID, Dummy),
    (tags::PATIENT_BIRTH_DATE, Empty),
    (tags::PATIENT_BIRTH_TIME, Remove),
    (tags::OTHER_PATIENT_IDS, Remove),
    (tags::OTHER_PATIENT_NAMES, Remove),
    (tags::PATIENT_BIRTH_NAME, Remove),
    (tags::PATIENT_MOTHER_BIRTH_NAME, Remove),
    (tags::MEDICAL_RECORD_LOCATOR, Remove),
    (tags::ETHNIC_GROUP, Remove),
    (tags::PATIENT_COMMENTS, Remove),
    (tags::PATIENT_SPECIES_DESCRIPTION, Remove),
    (tags::PATIENT_BREED_DESCRIPTION, Remove),
    (tags::RESPONSIBLE_PERSON, Remove),
    (tags::RESPONSIBLE_ORGANIZATION, Remove),
    (tags::PATIENT_IDENTITY_REMOVED, Dummy),
    (tags::PATIENT_SEX_NEUTERED, Remove),
    (tags::ADDITIONAL_PATIENT_HISTORY, Remove),
    (tags::OCCUPATION, Remove),
    (tags::MILITARY_RANK, Remove),
    (tags::BRANCH_OF_SERVICE, Remove),
    (tags::COUNTRY_OF_RESIDENCE, Remove),
    (tags::REGION_OF_RESIDENCE, Remove),
    // study
    (tags::STUDY_INSTANCE_UID, NewUid),
    (tags::STUDY_DATE, Empty),
    (tags::STUDY_TIME, Empty),
    (tags::REFERRING_PHYSICIAN_NAME, Empty),
    (tags::REFERRING_PHYSICIAN_ADDRESS, Remove),
    (tags::REFERRING_PHYSICIAN_TELEPHONE_NUMBERS, Remove),
    (tags::STUDY_ID, Empty),
    (tags::ACCESSION_NUMBER, Empty),
    (tags::ISSUER_OF_ACCESSION_NUMBER_SEQUENCE, Remove),
    (tags::STUDY_DESCRIPTION, Clean),
    (tags::PHYSICIANS_OF_RECORD, Remove),
    (tags::NAME_OF_PHYSICIANS_READING_STUDY, Remove),
    (tags::REQUESTING_PHYSICIAN, Remove),
    (tags::CONSULTING_PHYSICIAN_NAME, Remove),
    (tags::ADMITTING_DIAGNOSES_DESCRIPTION, Remove),
    (tags::REFERENCED_STUDY_SEQUENCE, Keep),
    // series
    (tags::SERIES_INSTANCE_UID, NewUid),
    (tags::SERIES_NUMBER, Keep),
    (tags::SERIES_DATE, Empty),
    (tags::SERIES_TIME, Empty),
    (tags::SERIES_DESCRIPTION, Clean),
    (tags::PERFORMING_PHYSICIAN_NAME, Empty),
    (tags::OPERATORS_NAME, Empty),
    (tags::PROTOCOL_NAME, Clean),
    (tags::REQUEST_ATTRIBUTES_SEQUENCE, Remove),
    // equipment
    (tags::INSTITUTION_NAME, Remove),
    (tags::INSTITUTION_ADDRESS, Remove),
    (tags::INSTITUTIONAL_DEPARTMENT_NAME, Remove),
    (tags::STATION_NAME, Keep),
    (tags::DEVICE_SERIAL_NUMBER, Remove),
    // image
    (tags::SOP_INSTANCE_UID, NewUid),
    (tags::ACQUISITION_DATE, Empty),
    (tags::ACQUISITION_TIME, Empty),
    (tags::ACQUISITION_DATE_TIME, Empty),
    (tags::CONTENT_DATE, Empty),
    (tags::CONTENT_TIME, Empty),
    (tags::INSTANCE_CREATION_DATE, Empty),
    (tags::INSTANCE_CREATION_TIME, Empty),
    (tags::INSTANCE_CREATOR_UID, Remove),
    (tags::DERIVATION_DESCRIPTION, Clean),
    (tags::IMAGE_COMMENTS, Remove),
    (tags::FRAME_COMMENTS, Remove),
    // SOP common
    (tags::INSTANCE_NUMBER, Keep),
    (tags::TIMEZONE_OFFSET_FROM_UTC, Remove),
    (tags::DIGITAL_SIGNATURES_SEQUENCE, Remove),
    (tags::MODIFIED_ATTRIBUTES_SEQUENCE, Remove),
    (tags::ORIGINAL_ATTRIBUTES_SEQUENCE, Remove),
    // visit and request
    (tags::REQUESTING_SERVICE, Remove),
    (tags::CURRENT_PATIENT_LOCATION, Remove),
    (tags::PATIENT_INSTITUTION_RESIDENCE, Remove),
    (tags::PERFORMED_PROCEDURE_STEP_START_DATE, Empty),
    (tags::PERFORMED_PROCEDURE_STEP_START_TIME, Empty),
    (tags::PERFORMED_PROCEDURE_STEP_END_DATE, Empty),
    (tags::PERFORMED_PROCEDURE_STEP_END_TIME, Empty),
    // person identification and free text
    (tags::PERSON_NAME, Remove),
    (tags::PERSON_ADDRESS, Remove),
    (tags::PERSON_TELEPHONE_NUMBERS, Remove),
    (tags::TEXT_COMMENTS, Remove),
    (tags::TEXT_STRING, Remove),
    // file meta
    (tags::MEDIA_STORAGE_SOP_INSTANCE_UID, NewUid),
];

const DEVICE_IDENTITY: &[Tag] = &[
    tags::INSTITUTION_NAME,
    tags::INSTITUTIONAL_DEPARTMENT_NAME,
    tags::STATION_NAME,
    tags::DEVICE_SERIAL_NUMBER,
];

const INSTANCE_UIDS: &[Tag] = &[
    tags::STUDY_INSTANCE_UID,
    tags::SERIES_INSTANCE_UID,
    tags::SOP_INSTANCE_UID,
    tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
];

const TEMPORAL: &[Tag] = &[
    tags::STUDY_DATE,
    tags::STUDY_TIME,
    tags::SERIES_DATE,
    tags::SERIES_TIME,
    tags::ACQUISITION_DATE,
    tags::ACQUISITION_TIME,
    tags::ACQUISITION_DATE_TIME,
    tags::CONTENT_DATE,
    tags::CONTENT_TIME,
];

const CLEAN_DESCRIPTORS: &[Tag] = &[
    tags::STUDY_DESCRIPTION,
    tags::SERIES_DESCRIPTION,
    tags::PROTOCOL_NAME,
    tags::DERIVATION_DESCRIPTION,
    tags::IMAGE_COMMENTS,
    tags::REQUESTED_PROCEDURE_DESCRIPTION,
    tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION,
];

fn basic_actions(options: &Options) -> HashMap<Tag, Action> {
    let mut actions: HashMap<Tag, Action> = BASIC.iter().copied().collect();
    let mut set = |list: &[Tag], action| {
        for &tag in list {
            actions.insert(tag, action);
        }
    };

    if options.retain_device_identity {
        set(DEVICE_IDENTITY, Keep);
    }
    if options.retain_patient_characteristics {
        set(
            &[
                tags::PATIENT_AGE,
                tags::PATIENT_SEX,
                tags::PATIENT_SIZE,
                tags::PATIENT_WEIGHT,
            ],
            Keep,
        );
    } else {
        set(&[tags::PATIENT_AGE, tags::PATIENT_SEX], Empty);
        set(&[tags::PATIENT_SIZE, tags::PATIENT_WEIGHT], Remove);
    }
    if options.retain_uids {
        set(INSTANCE_UIDS, Keep);
    }
    if options.retain_longitudinal_temporal_info {
        set(TEMPORAL, Callback);
    }
    if options.clean_descriptors {
        set(CLEAN_DESCRIPTORS, Clean);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_names() {
        for p in [
            Profile::Basic,
            Profile::Clean,
            Profile::RetainUids,
            Profile::RetainDeviceIdentity,
            Profile::Custom,
        ] {
            assert_eq!(p.name().parse::<Profile>().unwrap(), p);
        }
        assert_eq!("Retain-UIDs".parse::<Profile>().unwrap(), Profile::RetainUids);
        assert!("strict".parse::<Profile>().is_err());
    }

    #[test]
    fn basic_table() {
        let actions = Profile::Basic.actions(&Options::for_profile(Profile::Basic));
        assert_eq!(actions.get(&tags::PATIENT_NAME), Some(&Dummy));
        assert_eq!(actions.get(&tags::PATIENT_BIRTH_DATE), Some(&Empty));
        assert_eq!(actions.get(&tags::STUDY_INSTANCE_UID), Some(&NewUid));
        assert_eq!(actions.get(&tags::INSTITUTION_NAME), Some(&Remove));
        assert_eq!(actions.get(&tags::PATIENT_SEX), Some(&Empty));
        assert_eq!(actions.get(&tags::PATIENT_WEIGHT), Some(&Remove));
        assert_eq!(actions.get(&tags::IMAGE_COMMENTS), Some(&Remove));
        assert_eq!(actions.get(&tags::MODALITY), None);
    }

    #[test]
    fn options_flip_actions() {
        let options = Options {
            retain_uids: true,
            retain_device_identity: true,
            retain_patient_characteristics: true,
            retain_longitudinal_temporal_info: true,
            clean_descriptors: true,
            ..Options::default()
        };
        let actions = Profile::Basic.actions(&options);
        assert_eq!(actions.get(&tags::SOP_INSTANCE_UID), Some(&Keep));
        assert_eq!(actions.get(&tags::INSTITUTION_NAME), Some(&Keep));
        assert_eq!(actions.get(&tags::PATIENT_AGE), Some(&Keep));
        assert_eq!(actions.get(&tags::STUDY_DATE), Some(&Callback));
        assert_eq!(actions.get(&tags::IMAGE_COMMENTS), Some(&Clean));
        assert_eq!(
            actions.get(&tags::REQUESTED_PROCEDURE_DESCRIPTION),
            Some(&Clean)
        );
    }

    #[test]
    fn custom_profile_is_empty() {
        let options = Options {
            retain_uids: true,
            ..Options::default()
        };
        assert!(Profile::Custom.actions(&options).is_empty());
    }
}
