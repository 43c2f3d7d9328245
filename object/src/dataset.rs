//! The in-memory DICOM data set.
//!
//! A [`DataSet`] maps attribute tags to data elements.
//! Entries are kept ordered by tag,
//! so every observer yields elements in ascending tag order.
//!
//! Besides the basic map operations,
//! a number of helper mutators are provided for commonly edited attributes.
//! Each of them validates its input against the value representation
//! of the attribute before touching the data set.

use chrono::{Local, NaiveDate, NaiveTime};
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmkit_core::header::GroupNumber;
use dcmkit_core::uid;
use dcmkit_core::value::ValueError;
use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// An error which may occur when accessing or editing a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Unknown attribute name `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
    #[snafu(display("Duplicate data element {}", tag))]
    DuplicateElement { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Invalid value for element {}", tag))]
    InvalidValue { tag: Tag, source: ValueError },
    #[snafu(display("Invalid UID `{}` for element {}", uid, tag))]
    InvalidUid {
        tag: Tag,
        uid: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid date `{}` for element {}, expected YYYYMMDD", value, tag))]
    InvalidDate {
        tag: Tag,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid age `{}`, expected a form such as 045Y", value))]
    InvalidAge { value: String, backtrace: Backtrace },
    #[snafu(display("Invalid patient sex `{}`, expected M, F or O", value))]
    InvalidSex { value: String, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of visiting an element in [`DataSet::walk_modify`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WalkAction {
    /// The element was left untouched.
    Keep,
    /// The element was changed in place.
    Modified,
    /// The element should be removed from the data set.
    Remove,
}

/// A tally of the changes made by [`DataSet::walk_modify`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    pub visited: usize,
    pub modified: usize,
    pub removed: usize,
}

/// A DICOM data set: a collection of data elements indexed by tag.
///
/// # Example
///
/// ```
/// # use dcmkit_object::DataSet;
/// # use dcmkit_dictionary_std::tags;
/// let mut ds = DataSet::new();
/// ds.set_patient_name("Doe^John")?;
/// ds.set_patient_sex("f")?;
///
/// assert_eq!(ds.string(tags::PATIENT_NAME), Some("Doe^John"));
/// assert_eq!(ds.string(tags::PATIENT_SEX), Some("F"));
/// assert_eq!(ds.len(), 2);
/// # Ok::<(), dcmkit_object::dataset::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
}

impl DataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Create a data set from a list of elements.
    ///
    /// Fails if two elements share the same tag.
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = DataElement>,
    {
        let mut entries = BTreeMap::new();
        for elem in elements {
            let tag = elem.tag();
            ensure!(
                entries.insert(tag, elem).is_none(),
                DuplicateElementSnafu { tag }
            );
        }
        Ok(DataSet { entries })
    }

    /// Insert a data element,
    /// replacing (and returning) any previous element with the same tag.
    pub fn put(&mut self, elem: DataElement) -> Option<DataElement> {
        self.entries.insert(elem.tag(), elem)
    }

    /// Retrieve a data element by its tag.
    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a data element by its tag,
    /// failing if it is not present.
    pub fn element(&self, tag: Tag) -> Result<&DataElement> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a data element by its keyword (e.g. `PatientName`)
    /// or by its full name (e.g. `Patient's Name`).
    pub fn get_by_keyword(&self, name: &str) -> Result<Option<&DataElement>> {
        let tag = StandardDataDictionary
            .by_name(name)
            .map(|e| e.tag())
            .context(NoSuchAttributeNameSnafu { name })?;
        Ok(self.entries.get(&tag))
    }

    /// Retrieve the first string of the element with the given tag,
    /// if it is present and holds text.
    pub fn string(&self, tag: Tag) -> Option<&str> {
        self.entries.get(&tag).and_then(|e| e.value().first_str())
    }

    /// Whether an element with the given tag is present.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Remove and return the element with the given tag,
    /// failing if it is not present.
    pub fn remove(&mut self, tag: Tag) -> Result<DataElement> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Remove and return the element with the given tag, if present.
    pub fn take(&mut self, tag: Tag) -> Option<DataElement> {
        self.entries.remove(&tag)
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All elements in ascending tag order.
    pub fn elements(&self) -> Vec<&DataElement> {
        self.entries.values().collect()
    }

    /// All tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, DataElement> {
        self.entries.values()
    }

    /// Insert all elements of another data set,
    /// replacing elements with the same tag.
    pub fn merge(&mut self, other: DataSet) {
        self.entries.extend(other.entries);
    }

    /// A new data set with the file meta information elements (group 0002).
    pub fn file_meta_information(&self) -> DataSet {
        DataSet {
            entries: self
                .entries
                .range(Tag(0x0002, 0x0000)..=Tag(0x0002, 0xFFFF))
                .map(|(t, e)| (*t, e.clone()))
                .collect(),
        }
    }

    /// Visit every element in tag order.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&DataElement),
    {
        for elem in self.entries.values() {
            f(elem);
        }
    }

    /// Visit every element in tag order with the opportunity
    /// to change its value or to remove it.
    ///
    /// Visiting stops at the first error,
    /// leaving the changes made so far in place.
    pub fn walk_modify<F, E>(&mut self, mut f: F) -> std::result::Result<WalkSummary, E>
    where
        F: FnMut(&mut DataElement) -> std::result::Result<WalkAction, E>,
    {
        let mut summary = WalkSummary::default();
        let mut result = Ok(());
        self.entries.retain(|_, elem| {
            if result.is_err() {
                return true;
            }
            summary.visited += 1;
            match f(elem) {
                Ok(WalkAction::Keep) => true,
                Ok(WalkAction::Modified) => {
                    summary.modified += 1;
                    true
                }
                Ok(WalkAction::Remove) => {
                    summary.removed += 1;
                    false
                }
                Err(e) => {
                    result = Err(e);
                    true
                }
            }
        });
        result.map(|_| summary)
    }

    /// Remove all private elements (odd groups),
    /// returning how many were removed.
    pub fn remove_private_tags(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|tag, _| !tag.is_private());
        before - self.entries.len()
    }

    /// Remove all elements of the given group,
    /// returning how many were removed.
    ///
    /// The repeating groups of curve data (0x5000)
    /// and overlays (0x6000) cover the whole range
    /// up to 0x50FF and 0x60FF respectively.
    pub fn remove_group(&mut self, group: GroupNumber) -> usize {
        let range = match group {
            0x5000 | 0x6000 => group..=group + 0x00FF,
            _ => group..=group,
        };
        let before = self.entries.len();
        self.entries.retain(|tag, _| !range.contains(&tag.group()));
        before - self.entries.len()
    }

    /// Set a textual attribute.
    ///
    /// An empty string results in an empty value.
    pub fn set_string(&mut self, tag: Tag, vr: VR, value: &str) -> Result<()> {
        let value = if value.is_empty() {
            Value::empty(vr)
        } else {
            Value::str(vr, value).context(InvalidValueSnafu { tag })?
        };
        self.put(DataElement::from_value(tag, value));
        Ok(())
    }

    /// Set _Patient's Name_.
    pub fn set_patient_name(&mut self, name: &str) -> Result<()> {
        self.set_string(tags::PATIENT_NAME, VR::PN, name)
    }

    /// Set _Patient ID_.
    pub fn set_patient_id(&mut self, id: &str) -> Result<()> {
        self.set_string(tags::PATIENT_ID, VR::LO, id)
    }

    /// Set _Patient's Birth Date_ from a `YYYYMMDD` string.
    /// An empty string clears the value.
    pub fn set_patient_birth_date(&mut self, date: &str) -> Result<()> {
        let tag = tags::PATIENT_BIRTH_DATE;
        ensure!(
            date.is_empty() || is_valid_date(date),
            InvalidDateSnafu { tag, value: date }
        );
        self.set_string(tag, VR::DA, date)
    }

    /// Set _Patient's Age_, such as `045Y`.
    /// An empty string clears the value.
    pub fn set_patient_age(&mut self, age: &str) -> Result<()> {
        ensure!(age.is_empty() || age.len() >= 4, InvalidAgeSnafu { value: age });
        self.set_string(tags::PATIENT_AGE, VR::AS, age)
    }

    /// Set _Patient's Sex_ to one of `M`, `F` or `O` (case insensitive).
    /// An empty string clears the value.
    pub fn set_patient_sex(&mut self, sex: &str) -> Result<()> {
        let sex = sex.to_uppercase();
        ensure!(
            matches!(sex.as_str(), "" | "M" | "F" | "O"),
            InvalidSexSnafu { value: sex }
        );
        self.set_string(tags::PATIENT_SEX, VR::CS, &sex)
    }

    /// Set _Accession Number_.
    pub fn set_accession_number(&mut self, accession: &str) -> Result<()> {
        self.set_string(tags::ACCESSION_NUMBER, VR::SH, accession)
    }

    /// Set a UID attribute, generating a new UID if `uid` is empty.
    /// Returns the UID stored.
    fn set_uid(&mut self, tag: Tag, uid: &str) -> Result<String> {
        let uid = if uid.is_empty() {
            uid::generate()
        } else {
            ensure!(uid::is_valid(uid), InvalidUidSnafu { tag, uid });
            uid.to_string()
        };
        self.set_string(tag, VR::UI, &uid)?;
        Ok(uid)
    }

    /// Set _Study Instance UID_,
    /// generating a new one if the given UID is empty.
    pub fn set_study_instance_uid(&mut self, uid: &str) -> Result<()> {
        self.set_uid(tags::STUDY_INSTANCE_UID, uid).map(drop)
    }

    /// Set _Series Instance UID_,
    /// generating a new one if the given UID is empty.
    pub fn set_series_instance_uid(&mut self, uid: &str) -> Result<()> {
        self.set_uid(tags::SERIES_INSTANCE_UID, uid).map(drop)
    }

    /// Set _SOP Instance UID_,
    /// generating a new one if the given UID is empty.
    ///
    /// _Media Storage SOP Instance UID_ follows along if present.
    pub fn set_sop_instance_uid(&mut self, uid: &str) -> Result<()> {
        let uid = self.set_uid(tags::SOP_INSTANCE_UID, uid)?;
        if self.contains(tags::MEDIA_STORAGE_SOP_INSTANCE_UID) {
            self.set_uid(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, &uid)?;
        }
        Ok(())
    }

    /// Replace the study, series and SOP instance UIDs
    /// with freshly generated ones.
    ///
    /// _Media Storage SOP Instance UID_ is kept equal to the new
    /// SOP Instance UID if present.
    pub fn generate_new_uids(&mut self) -> Result<()> {
        self.set_study_instance_uid("")?;
        self.set_series_instance_uid("")?;
        self.set_sop_instance_uid("")
    }

    /// Set _Study Date_.
    pub fn set_study_date(&mut self, date: NaiveDate) -> Result<()> {
        self.set_string(tags::STUDY_DATE, VR::DA, &format_date(date))
    }

    /// Set _Study Time_.
    pub fn set_study_time(&mut self, time: NaiveTime) -> Result<()> {
        self.set_string(tags::STUDY_TIME, VR::TM, &format_time(time))
    }

    /// Set _Series Number_.
    pub fn set_series_number(&mut self, number: i64) -> Result<()> {
        self.set_string(tags::SERIES_NUMBER, VR::IS, &number.to_string())
    }

    /// Set _Instance Number_.
    pub fn set_instance_number(&mut self, number: i64) -> Result<()> {
        self.set_string(tags::INSTANCE_NUMBER, VR::IS, &number.to_string())
    }

    /// Stamp _Instance Creation Date_ and _Instance Creation Time_
    /// with the current local date and time.
    ///
    /// _Content Date_ and _Content Time_ are updated too
    /// if they are already present, each keeping its own VR.
    pub fn set_current_date_time(&mut self) -> Result<()> {
        let now = Local::now().naive_local();
        let date = format_date(now.date());
        let time = format_time(now.time());

        self.set_string(tags::INSTANCE_CREATION_DATE, VR::DA, &date)?;
        self.set_string(tags::INSTANCE_CREATION_TIME, VR::TM, &time)?;
        for (tag, text) in [(tags::CONTENT_DATE, &date), (tags::CONTENT_TIME, &time)] {
            if let Some(vr) = self.get(tag).map(DataElement::vr) {
                self.set_string(tag, vr, text)?;
            }
        }
        Ok(())
    }
}

fn is_valid_date(date: &str) -> bool {
    date.len() == 8 && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H%M%S").to_string()
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = btree_map::IntoValues<Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl Extend<DataElement> for DataSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = DataElement>,
    {
        self.entries.extend(iter.into_iter().map(|e| (e.tag(), e)))
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.entries.values() {
            writeln!(f, "{}", elem.display_with(&StandardDataDictionary))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::value::C;

    fn text(tag: Tag, vr: VR, s: &str) -> DataElement {
        DataElement::from_value(tag, Value::Strs(vr, C::from_elem(s.to_string(), 1)))
    }

    fn sample() -> DataSet {
        DataSet::from_elements(vec![
            text(tags::PATIENT_ID, VR::LO, "PAT001"),
            text(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"),
            text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"),
            text(Tag(0x0009, 0x0010), VR::LO, "ACME"),
            DataElement::from_value(Tag(0x6000, 0x3000), Value::Bytes(VR::OW, vec![0; 4])),
            DataElement::from_value(Tag(0x6002, 0x0010), Value::Ints(VR::US, C::from_slice(&[8]))),
            DataElement::from_value(Tag(0x5000, 0x3000), Value::Bytes(VR::OB, vec![1, 2])),
        ])
        .unwrap()
    }

    #[test]
    fn from_elements_rejects_duplicates() {
        let err = DataSet::from_elements(vec![
            text(tags::PATIENT_ID, VR::LO, "A"),
            text(tags::PATIENT_ID, VR::LO, "B"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateElement { tag, .. } if tag == tags::PATIENT_ID));
    }

    #[test]
    fn observers_are_tag_ordered() {
        let ds = sample();
        let tags: Vec<_> = ds.tags().collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
        assert_eq!(ds.elements().len(), ds.len());
        assert_eq!(ds.elements()[0].tag(), tags::MEDIA_STORAGE_SOP_INSTANCE_UID);
    }

    #[test]
    fn put_replaces_and_remove_requires_presence() {
        let mut ds = sample();
        let old = ds.put(text(tags::PATIENT_ID, VR::LO, "PAT002")).unwrap();
        assert_eq!(old.value().first_str(), Some("PAT001"));
        assert_eq!(ds.string(tags::PATIENT_ID), Some("PAT002"));

        assert!(ds.remove(tags::PATIENT_ID).is_ok());
        assert!(matches!(
            ds.remove(tags::PATIENT_ID),
            Err(Error::NoSuchDataElementTag { .. })
        ));
        assert!(ds.take(tags::PATIENT_ID).is_none());
    }

    #[test]
    fn lookup_by_keyword() {
        let ds = sample();
        let e = ds.get_by_keyword("PatientID").unwrap().unwrap();
        assert_eq!(e.tag(), tags::PATIENT_ID);
        assert!(ds.get_by_keyword("PatientName").unwrap().is_none());
        assert!(ds.get_by_keyword("NotAnAttribute").is_err());
    }

    #[test]
    fn merge_and_meta() {
        let mut ds = sample();
        let mut other = DataSet::new();
        other.set_patient_id("OTHER").unwrap();
        other.set_patient_name("Doe^Jane").unwrap();
        ds.merge(other);
        assert_eq!(ds.string(tags::PATIENT_ID), Some("OTHER"));
        assert_eq!(ds.string(tags::PATIENT_NAME), Some("Doe^Jane"));

        let meta = ds.file_meta_information();
        assert_eq!(meta.len(), 1);
        assert!(meta.contains(tags::MEDIA_STORAGE_SOP_INSTANCE_UID));
    }

    #[test]
    fn group_removal() {
        let mut ds = sample();
        assert_eq!(ds.remove_private_tags(), 1);
        assert_eq!(ds.remove_group(0x6000), 2);
        assert_eq!(ds.remove_group(0x5000), 1);
        assert_eq!(ds.remove_group(0x0010), 1);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn walk_modify_reports_changes() {
        let mut ds = sample();
        let summary = ds
            .walk_modify(|e| -> Result<WalkAction, ()> {
                if e.tag().is_private() {
                    Ok(WalkAction::Remove)
                } else if e.tag() == tags::PATIENT_ID {
                    e.set_value(Value::Strs(VR::LO, C::from_elem("X".into(), 1)))
                        .unwrap();
                    Ok(WalkAction::Modified)
                } else {
                    Ok(WalkAction::Keep)
                }
            })
            .unwrap();
        assert_eq!(summary.visited, 7);
        assert_eq!(summary.modified, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(ds.string(tags::PATIENT_ID), Some("X"));

        let err = ds.walk_modify(|_| Err::<WalkAction, _>("stop"));
        assert_eq!(err, Err("stop"));
        assert_eq!(ds.len(), 6);
    }

    #[test]
    fn helper_validation() {
        let mut ds = DataSet::new();
        ds.set_patient_birth_date("19750315").unwrap();
        ds.set_patient_birth_date("").unwrap();
        assert!(ds.get(tags::PATIENT_BIRTH_DATE).unwrap().value().is_empty());
        assert!(ds.set_patient_birth_date("1975-03-15").is_err());
        assert!(ds.set_patient_birth_date("19751315").is_err());

        ds.set_patient_age("045Y").unwrap();
        assert!(ds.set_patient_age("45Y").is_err());

        ds.set_patient_sex("o").unwrap();
        assert_eq!(ds.string(tags::PATIENT_SEX), Some("O"));
        assert!(ds.set_patient_sex("X").is_err());

        assert!(ds.set_study_instance_uid("1.2.03").is_err());
        ds.set_study_instance_uid("1.2.3").unwrap();
        assert_eq!(ds.string(tags::STUDY_INSTANCE_UID), Some("1.2.3"));

        // empty UIDs are replaced with generated ones
        ds.set_study_instance_uid("").unwrap();
        ds.set_series_instance_uid("").unwrap();
        ds.set_sop_instance_uid("").unwrap();
        let generated: Vec<_> = [
            tags::STUDY_INSTANCE_UID,
            tags::SERIES_INSTANCE_UID,
            tags::SOP_INSTANCE_UID,
        ]
        .iter()
        .map(|&tag| ds.string(tag).unwrap().to_string())
        .collect();
        for uid in &generated {
            assert!(uid::is_valid(uid), "invalid UID {}", uid);
            assert!(uid.starts_with(uid::UID_ROOT));
        }
        assert_ne!(generated[0], generated[1]);
        assert_ne!(generated[1], generated[2]);

        ds.set_series_number(42).unwrap();
        assert_eq!(ds.string(tags::SERIES_NUMBER), Some("42"));
        ds.set_study_date(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap())
            .unwrap();
        assert_eq!(ds.string(tags::STUDY_DATE), Some("20200131"));
        ds.set_study_time(NaiveTime::from_hms_opt(7, 5, 9).unwrap())
            .unwrap();
        assert_eq!(ds.string(tags::STUDY_TIME), Some("070509"));
    }

    #[test]
    fn new_uids_keep_media_storage_in_sync() {
        let mut ds = sample();
        ds.generate_new_uids().unwrap();
        let sop = ds.string(tags::SOP_INSTANCE_UID).unwrap();
        assert_ne!(sop, "1.2.3.4.5");
        assert!(uid::is_valid(sop));
        assert_eq!(ds.string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID), Some(sop));
        assert_ne!(
            ds.string(tags::STUDY_INSTANCE_UID),
            ds.string(tags::SERIES_INSTANCE_UID)
        );
    }

    #[test]
    fn current_date_time_keeps_element_vrs() {
        let mut ds = DataSet::new();
        ds.put(DataElement::empty(tags::CONTENT_DATE, VR::DA));
        ds.put(DataElement::empty(tags::CONTENT_TIME, VR::TM));
        ds.set_current_date_time().unwrap();

        assert_eq!(ds.get(tags::INSTANCE_CREATION_DATE).unwrap().vr(), VR::DA);
        assert_eq!(ds.get(tags::INSTANCE_CREATION_TIME).unwrap().vr(), VR::TM);
        assert_eq!(ds.get(tags::CONTENT_DATE).unwrap().vr(), VR::DA);
        assert_eq!(ds.get(tags::CONTENT_TIME).unwrap().vr(), VR::TM);
        assert_eq!(ds.string(tags::CONTENT_DATE).unwrap().len(), 8);
        assert_eq!(ds.string(tags::CONTENT_TIME).unwrap().len(), 6);
    }

    #[test]
    fn display_lists_elements() {
        let mut ds = DataSet::new();
        ds.set_patient_name("Doe^John").unwrap();
        let text = ds.to_string();
        assert_eq!(text, "(0010,0010) PN [Patient's Name] = Doe^John\n");
    }
}
