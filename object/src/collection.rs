//! An indexed collection of data sets.
//!
//! Data sets are stored by SOP Instance UID,
//! and indexed by series, study, patient, accession number,
//! SOP class and series number.
//! A single reader-writer lock guards the primary map and every index,
//! so that concurrent readers never observe a partial update.

use crate::DataSet;
use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;
use snafu::{ensure, Backtrace, Snafu};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

/// An error which may occur when adding a data set to a collection.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum CollectionError {
    #[snafu(display("Data set is missing required attribute {}", tag))]
    MissingAttribute { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Duplicate SOP Instance UID `{}`", uid))]
    DuplicateSopInstanceUid { uid: String, backtrace: Backtrace },
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

type Bucket = Vec<Arc<DataSet>>;

/// The index keys of a data set.
#[derive(Debug)]
struct Keys {
    sop_instance_uid: String,
    series_instance_uid: String,
    study_instance_uid: String,
    patient_id: String,
    accession_number: String,
    sop_class_uid: String,
    series_number: i64,
}

impl Keys {
    fn of(ds: &DataSet) -> Result<Self> {
        // these must be present, but may be empty
        let required = |tag: Tag| -> Result<String> {
            ensure!(ds.contains(tag), MissingAttributeSnafu { tag });
            Ok(ds.string(tag).unwrap_or_default().trim().to_owned())
        };
        let sop_instance_uid = required(tags::SOP_INSTANCE_UID)?;
        ensure!(
            !sop_instance_uid.is_empty(),
            MissingAttributeSnafu {
                tag: tags::SOP_INSTANCE_UID
            }
        );
        Ok(Keys {
            sop_instance_uid,
            series_instance_uid: required(tags::SERIES_INSTANCE_UID)?,
            study_instance_uid: required(tags::STUDY_INSTANCE_UID)?,
            patient_id: required(tags::PATIENT_ID)?,
            sop_class_uid: required(tags::SOP_CLASS_UID)?,
            accession_number: ds
                .string(tags::ACCESSION_NUMBER)
                .unwrap_or_default()
                .trim()
                .to_owned(),
            series_number: series_number(ds),
        })
    }
}

/// The series number of a data set,
/// or 0 if absent or malformed.
fn series_number(ds: &DataSet) -> i64 {
    let elem = match ds.get(tags::SERIES_NUMBER) {
        Some(elem) => elem,
        None => return 0,
    };
    if let Some(&n) = elem.value().ints_slice().and_then(|v| v.first()) {
        return n;
    }
    match elem.value().first_str().map(str::trim) {
        None | Some("") => 0,
        Some(text) => text.parse().unwrap_or_else(|_| {
            warn!("Malformed Series Number `{}`, indexing as 0", text);
            0
        }),
    }
}

#[derive(Debug, Default)]
struct Indexes {
    by_sop_instance_uid: HashMap<String, Arc<DataSet>>,
    by_series_instance_uid: HashMap<String, Bucket>,
    by_study_instance_uid: HashMap<String, Bucket>,
    by_patient_id: HashMap<String, Bucket>,
    by_accession_number: HashMap<String, Bucket>,
    by_sop_class_uid: HashMap<String, Bucket>,
    by_series_number: BTreeMap<i64, Bucket>,
}

impl Indexes {
    fn insert(&mut self, keys: Keys, ds: Arc<DataSet>) {
        let string_indexes = [
            (&mut self.by_series_instance_uid, keys.series_instance_uid),
            (&mut self.by_study_instance_uid, keys.study_instance_uid),
            (&mut self.by_patient_id, keys.patient_id),
            (&mut self.by_accession_number, keys.accession_number),
            (&mut self.by_sop_class_uid, keys.sop_class_uid),
        ];
        for (index, key) in string_indexes {
            index.entry(key).or_default().push(Arc::clone(&ds));
        }
        self.by_series_number
            .entry(keys.series_number)
            .or_default()
            .push(Arc::clone(&ds));
        self.by_sop_instance_uid.insert(keys.sop_instance_uid, ds);
    }

    fn scrub(&mut self, keys: &Keys, ds: &Arc<DataSet>) {
        let string_indexes = [
            (&mut self.by_series_instance_uid, &keys.series_instance_uid),
            (&mut self.by_study_instance_uid, &keys.study_instance_uid),
            (&mut self.by_patient_id, &keys.patient_id),
            (&mut self.by_accession_number, &keys.accession_number),
            (&mut self.by_sop_class_uid, &keys.sop_class_uid),
        ];
        for (index, key) in string_indexes {
            if remove_from_bucket(index.get_mut(key), ds) {
                index.remove(key);
            }
        }
        if remove_from_bucket(self.by_series_number.get_mut(&keys.series_number), ds) {
            self.by_series_number.remove(&keys.series_number);
        }
    }
}

/// Remove a data set from a bucket by pointer identity,
/// returning whether the bucket is left empty.
fn remove_from_bucket(bucket: Option<&mut Bucket>, ds: &Arc<DataSet>) -> bool {
    match bucket {
        Some(bucket) => {
            if let Some(i) = bucket.iter().position(|d| Arc::ptr_eq(d, ds)) {
                bucket.swap_remove(i);
            }
            bucket.is_empty()
        }
        None => false,
    }
}

/// A thread safe collection of data sets with secondary indexes.
///
/// # Example
///
/// ```
/// # use dcmkit_object::{DataSet, DataSetCollection};
/// # use dcmkit_dictionary_std::tags;
/// # use dcmkit_core::VR;
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ds = DataSet::new();
/// ds.set_string(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7")?;
/// ds.set_string(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.1")?;
/// ds.set_study_instance_uid("1.2.3.1000")?;
/// ds.set_series_instance_uid("1.2.3.100")?;
/// ds.set_patient_id("PAT001")?;
///
/// let collection = DataSetCollection::new();
/// collection.add(ds)?;
/// assert_eq!(collection.get_by_study_instance_uid("1.2.3.1000").len(), 1);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DataSetCollection {
    inner: RwLock<Indexes>,
}

impl DataSetCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        DataSetCollection::default()
    }

    /// Create a collection from a sequence of data sets,
    /// failing on the first one which cannot be added.
    pub fn from_datasets<I>(datasets: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<DataSet>>,
    {
        let collection = DataSetCollection::new();
        for ds in datasets {
            collection.add(ds)?;
        }
        Ok(collection)
    }

    fn read(&self) -> RwLockReadGuard<'_, Indexes> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indexes> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a data set to the collection.
    ///
    /// SOP Instance UID, Series Instance UID, Study Instance UID,
    /// Patient ID and SOP Class UID must be present,
    /// and only the SOP Instance UID must also be non-empty.
    /// Accession Number and Series Number are optional,
    /// indexed as the empty string and 0 when missing.
    /// Fails without any change to the collection
    /// if the SOP Instance UID is already present.
    pub fn add(&self, ds: impl Into<Arc<DataSet>>) -> Result<()> {
        let ds = ds.into();
        let keys = Keys::of(&ds)?;
        let mut indexes = self.write();
        ensure!(
            !indexes
                .by_sop_instance_uid
                .contains_key(&keys.sop_instance_uid),
            DuplicateSopInstanceUidSnafu {
                uid: keys.sop_instance_uid.clone()
            }
        );
        indexes.insert(keys, ds);
        Ok(())
    }

    /// Retrieve the data set with the given SOP Instance UID.
    pub fn get_by_sop_instance_uid(&self, uid: &str) -> Option<Arc<DataSet>> {
        self.read().by_sop_instance_uid.get(uid).cloned()
    }

    /// Retrieve all data sets of the given series.
    pub fn get_by_series_instance_uid(&self, uid: &str) -> Vec<Arc<DataSet>> {
        bucket(&self.read().by_series_instance_uid, uid)
    }

    /// Retrieve all data sets of the given study.
    pub fn get_by_study_instance_uid(&self, uid: &str) -> Vec<Arc<DataSet>> {
        bucket(&self.read().by_study_instance_uid, uid)
    }

    /// Retrieve all data sets of the given patient.
    pub fn get_by_patient_id(&self, id: &str) -> Vec<Arc<DataSet>> {
        bucket(&self.read().by_patient_id, id)
    }

    /// Retrieve all data sets with the given accession number.
    pub fn get_by_accession_number(&self, accession: &str) -> Vec<Arc<DataSet>> {
        bucket(&self.read().by_accession_number, accession)
    }

    /// Retrieve all data sets of the given SOP class.
    pub fn get_by_sop_class_uid(&self, uid: &str) -> Vec<Arc<DataSet>> {
        bucket(&self.read().by_sop_class_uid, uid)
    }

    /// Retrieve all data sets with the given series number.
    pub fn get_by_series_number(&self, number: i64) -> Vec<Arc<DataSet>> {
        self.read()
            .by_series_number
            .get(&number)
            .cloned()
            .unwrap_or_default()
    }

    /// Retrieve all data sets with a series number in `lo..=hi`,
    /// in ascending series number order.
    pub fn get_series_number_range(&self, lo: i64, hi: i64) -> Vec<Arc<DataSet>> {
        if lo > hi {
            return Vec::new();
        }
        self.read()
            .by_series_number
            .range(lo..=hi)
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect()
    }

    /// Remove the data set with the given SOP Instance UID
    /// from the collection and all of its indexes.
    pub fn remove(&self, uid: &str) -> Option<Arc<DataSet>> {
        let mut indexes = self.write();
        let ds = indexes.by_sop_instance_uid.remove(uid)?;
        match Keys::of(&ds) {
            Ok(keys) => indexes.scrub(&keys, &ds),
            Err(e) => warn!("Stored data set lost its index keys: {}", e),
        }
        Some(ds)
    }

    /// Whether a data set with the given SOP Instance UID is present.
    pub fn contains(&self, uid: &str) -> bool {
        self.read().by_sop_instance_uid.contains_key(uid)
    }

    /// The number of data sets.
    pub fn len(&self) -> usize {
        self.read().by_sop_instance_uid.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.read().by_sop_instance_uid.is_empty()
    }

    /// All data sets, sorted by SOP Instance UID.
    pub fn datasets(&self) -> Vec<Arc<DataSet>> {
        let indexes = self.read();
        let mut entries: Vec<_> = indexes.by_sop_instance_uid.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, ds)| Arc::clone(ds)).collect()
    }
}

fn bucket(index: &HashMap<String, Bucket>, key: &str) -> Vec<Arc<DataSet>> {
    index.get(key).cloned().unwrap_or_default()
}
