use crate::tags::ENTRIES;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange::*, VirtualVr};
use dcmkit_core::header::Tag;
use dcmkit_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: human readable name → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
    /// repeating elements of the form (gggg, eexx). The `xx` portion is zeroed.
    repeating_eexx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_keyword: HashMap::with_capacity(ENTRIES.len() + 2),
            by_name: HashMap::with_capacity(ENTRIES.len() + 2),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            repeating_ggxx: HashSet::with_capacity(16),
            repeating_eexx: HashSet::new(),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) -> &mut Self {
        self.by_keyword.insert(entry.alias, entry);
        self.by_name.insert(entry.name, entry);
        self.by_tag.insert(entry.tag.inner(), entry);
        match entry.tag {
            Group100(tag) => {
                self.repeating_ggxx.insert(tag);
            }
            Element100(tag) => {
                self.repeating_eexx.insert(tag);
            }
            _ => {}
        }
        self
    }

    /// The number of attributes in the registry.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: GroupLength,
    alias: "GenericGroupLength",
    name: "Generic Group Length",
    vr: VirtualVr::Exact(VR::UL),
    vm: "1",
    retired: false,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: PrivateCreator,
    alias: "PrivateCreator",
    name: "Private Creator",
    vr: VirtualVr::Exact(VR::LO),
    vm: "1",
    retired: false,
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading DICOM objects.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        let r = registry();

        r.by_tag
            .get(&tag)
            .or_else(|| {
                // check tags repeating in different groups
                let group_trimmed = Tag(tag.0 & 0xFF00, tag.1);
                if r.repeating_ggxx.contains(&group_trimmed) {
                    return r.by_tag.get(&group_trimmed);
                }
                // check tags repeating in different elements
                let elem_trimmed = Tag(tag.0, tag.1 & 0xFF00);
                if r.repeating_eexx.contains(&elem_trimmed) {
                    return r.by_tag.get(&elem_trimmed);
                }

                None
            })
            .cloned()
            .or_else(|| {
                // check for private creator
                if PrivateCreator.contains(tag) {
                    return Some(&PRIVATE_CREATOR_ENTRY);
                }
                // check for group length in even groups
                if GroupLength.contains(tag) {
                    return Some(&GROUP_LENGTH_ENTRY);
                }

                None
            })
    }

    /// Resolve the value representation of an attribute,
    /// as needed when reading implicit VR data.
    ///
    /// Context dependent representations are relaxed
    /// (e.g. _Pixel Data_ resolves to OW).
    /// Returns `None` for unknown attributes.
    pub fn vr_of(tag: Tag) -> Option<VR> {
        StandardDataDictionary::indexed_tag(tag).map(|e| e.vr.relaxed())
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        let r = registry();
        r.by_keyword
            .get(name)
            .or_else(|| r.by_name.get(name))
            .cloned()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic entries are not part of the table,
    // inserting them manually
    d.by_keyword.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d.by_name.insert("Generic Group Length", &GROUP_LENGTH_ENTRY);
    d.by_keyword.insert("PrivateCreator", &PRIVATE_CREATOR_ENTRY);
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcmkit_core::dictionary::{
        DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, TagRange::*, VirtualVr,
    };
    use dcmkit_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                name: "Patient's Name",
                vr: VirtualVr::Exact(VR::PN),
                vm: "1",
                retired: false,
            })
        );

        let modality = dict.by_name("Modality").expect("Modality should exist");
        assert_eq!(modality.tag(), Tag(0x0008, 0x0060));
        assert_eq!(modality.vr(), VirtualVr::Exact(VR::CS));

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VirtualVr::Px);
        assert_eq!(pixel_data.vr.vrs().as_slice(), &[VR::OW, VR::OB]);

        let overlay_data = dict
            .by_tag(Tag(0x6000, 0x3000))
            .expect("Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");

        // repeated overlay data
        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
    }

    #[test]
    fn lookup_by_human_readable_name() {
        let dict = StandardDataDictionary;
        let entry = dict
            .by_name("Patient's Birth Date")
            .expect("name lookup should work");
        assert_eq!(entry.alias, "PatientBirthDate");
        assert!(dict.by_name("patientname").is_none());
    }

    #[test]
    fn retired_flag() {
        let dict = StandardDataDictionary;
        assert!(dict.by_tag(crate::tags::OTHER_PATIENT_IDS).unwrap().retired());
        assert!(!dict.by_tag(crate::tags::PATIENT_ID).unwrap().retired());
    }

    // tests for just a few attributes to make sure that the tag constants
    // were well installed into the crate
    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(SOP_INSTANCE_UID, Tag(0x0008, 0x0018));
        assert_eq!(STUDY_INSTANCE_UID, Tag(0x0020, 0x000D));
    }

    #[test]
    fn every_entry_is_indexed() {
        let dict = StandardDataDictionary;
        for entry in crate::tags::ENTRIES {
            let found = dict
                .by_tag(entry.tag.inner())
                .unwrap_or_else(|| panic!("{} should be indexed", entry.alias));
            assert_eq!(found.alias, entry.alias);
            assert_eq!(dict.by_name(entry.alias).map(|e| e.alias), Some(entry.alias));
        }
        assert_eq!(super::registry().len(), crate::tags::ENTRIES.len());
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(
            dict.parse_tag("OperatorsName"),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }

    #[test]
    fn can_query_by_expression() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_expr("(0010,0010)").map(|e| e.alias),
            Some("PatientName")
        );
        assert_eq!(dict.by_expr("0008,0060").map(|e| e.alias), Some("Modality"));
        assert_eq!(
            dict.by_expr("OperatorsName").map(|e| e.tag()),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't handle these
        assert_eq!(dict.parse_tag("0080 0010"), None);
        assert_eq!(dict.parse_tag("(0000.0600)"), None);
        assert_eq!(dict.parse_tag("OPERATORSNAME"), None);
    }

    #[test]
    fn has_group_length_tags() {
        use crate::tags::*;
        let dict = StandardDataDictionary::default();

        let meta_length = dict.by_tag(FILE_META_INFORMATION_GROUP_LENGTH).unwrap();
        assert_eq!(meta_length.alias, "FileMetaInformationGroupLength");
        assert_eq!(meta_length.vr, VirtualVr::Exact(VR::UL));

        // generic group length
        let generic = dict.by_tag(Tag(0x7FE0, 0x0000)).unwrap();
        assert_eq!(generic.tag, GroupLength);
        assert_eq!(generic.alias, "GenericGroupLength");
        assert_eq!(generic.name, "Generic Group Length");
        assert_eq!(generic.vr, VirtualVr::Exact(VR::UL));

        assert_eq!(
            dict.by_name("GenericGroupLength").map(|e| e.tag),
            Some(GroupLength)
        );

        // odd groups are private, not a group length
        assert!(dict.by_tag(Tag(0x0009, 0x0000)).is_none());
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        for tag in [
            Tag(0x0009, 0x0010),
            Tag(0x0009, 0x0011),
            Tag(0x000B, 0x0010),
            Tag(0x00ED, 0x00FF),
        ] {
            let entry = dict.by_tag(tag).unwrap();
            assert_eq!(entry.tag, PrivateCreator);
            assert_eq!(entry.alias, "PrivateCreator");
        }
        assert!(dict.by_tag(Tag(0x0009, 0x1010)).is_none());
    }

    #[test]
    fn implicit_vr_resolution() {
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0010, 0x0010)), Some(VR::PN));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x7FE0, 0x0010)), Some(VR::OW));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0028, 0x0000)), Some(VR::UL));
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0029, 0x1010)), None);
    }
}
