//! The DICOM data element type.

use crate::dictionary::{DataDictionary, DataDictionaryEntry};
use crate::header::{Tag, VR};
use crate::value::Value;
use snafu::{ensure, Backtrace, Snafu};
use std::fmt;

/// The maximum number of characters of a value shown
/// when displaying an element.
const MAX_DISPLAY_VALUE_LEN: usize = 80;

/// An error raised when an element and its value disagree
/// on the value representation.
#[derive(Debug, Snafu)]
#[snafu(display("VR mismatch for {}: element is {} but value is {}", tag, expected, got))]
pub struct VrMismatchError {
    tag: Tag,
    expected: VR,
    got: VR,
    backtrace: Backtrace,
}

/// A data element: an attribute tag and its value.
///
/// The value representation of the element is the one of its value,
/// so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    value: Value,
}

impl DataElement {
    /// Create a data element,
    /// checking that the value holds the given value representation.
    pub fn new(tag: Tag, vr: VR, value: Value) -> Result<Self, VrMismatchError> {
        ensure!(
            value.vr() == vr,
            VrMismatchSnafu {
                tag,
                expected: vr,
                got: value.vr()
            }
        );
        Ok(DataElement { tag, value })
    }

    /// Create a data element taking the value representation of its value.
    pub fn from_value(tag: Tag, value: Value) -> Self {
        DataElement { tag, value }
    }

    /// Create an element with an empty value of the given VR.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            tag,
            value: Value::empty(vr),
        }
    }

    /// The element's attribute tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.value.vr()
    }

    /// The element's value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the element's value, consuming the element.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Replace the element's value.
    /// Fails if the new value has a different value representation.
    pub fn set_value(&mut self, value: Value) -> Result<(), VrMismatchError> {
        ensure!(
            value.vr() == self.vr(),
            VrMismatchSnafu {
                tag: self.tag,
                expected: self.vr(),
                got: value.vr()
            }
        );
        self.value = value;
        Ok(())
    }

    /// The number of values in the element.
    pub fn value_multiplicity(&self) -> u32 {
        self.value.multiplicity()
    }

    /// The human readable attribute name, if known to the dictionary.
    pub fn name<'d, D>(&self, dict: &'d D) -> Option<&'d str>
    where
        D: DataDictionary,
    {
        dict.by_tag(self.tag).map(|e| e.name())
    }

    /// The attribute keyword, if known to the dictionary.
    pub fn keyword<'d, D>(&self, dict: &'d D) -> Option<&'d str>
    where
        D: DataDictionary,
    {
        dict.by_tag(self.tag).map(|e| e.alias())
    }

    /// Obtain a displayable form of the element,
    /// resolving the attribute name with the given dictionary.
    ///
    /// The display form is `(GGGG,EEEE) VR [Name] = value`,
    /// with the value truncated to 80 characters.
    pub fn display_with<'a, D>(&'a self, dict: &'a D) -> ElementDisplay<'a, D>
    where
        D: DataDictionary,
    {
        ElementDisplay {
            element: self,
            dict,
        }
    }
}

/// Displayable form of a data element, see [`DataElement::display_with`].
#[derive(Debug)]
pub struct ElementDisplay<'a, D> {
    element: &'a DataElement,
    dict: &'a D,
}

impl<'a, D> fmt::Display for ElementDisplay<'a, D>
where
    D: DataDictionary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.element;
        let name = e.name(self.dict).unwrap_or("Unknown");
        write!(
            f,
            "{} {} [{}] = {}",
            e.tag,
            e.vr(),
            name,
            truncate(&e.value.to_str())
        )
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > MAX_DISPLAY_VALUE_LEN {
        let mut out: String = s.chars().take(MAX_DISPLAY_VALUE_LEN).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DataDictionaryEntryRef, TagRange, VirtualVr};

    struct OneEntry(DataDictionaryEntryRef<'static>);

    impl DataDictionary for OneEntry {
        type Entry = DataDictionaryEntryRef<'static>;

        fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
            if self.0.tag.contains(tag) {
                Some(&self.0)
            } else {
                None
            }
        }

        fn by_name(&self, name: &str) -> Option<&Self::Entry> {
            if self.0.alias == name || self.0.name == name {
                Some(&self.0)
            } else {
                None
            }
        }
    }

    fn patient_name_dict() -> OneEntry {
        OneEntry(DataDictionaryEntryRef {
            tag: TagRange::Single(Tag(0x0010, 0x0010)),
            alias: "PatientName",
            name: "Patient's Name",
            vr: VirtualVr::Exact(VR::PN),
            vm: "1",
            retired: false,
        })
    }

    #[test]
    fn new_rejects_vr_mismatch() {
        let value = Value::str(VR::LO, "x").unwrap();
        assert!(DataElement::new(Tag(0x0010, 0x0010), VR::PN, value.clone()).is_err());
        let e = DataElement::new(Tag(0x0010, 0x0020), VR::LO, value).unwrap();
        assert_eq!(e.vr(), VR::LO);
    }

    #[test]
    fn set_value_rejects_vr_mismatch() {
        let mut e = DataElement::from_value(Tag(0x0010, 0x0010), Value::str(VR::PN, "A").unwrap());
        assert!(e.set_value(Value::str(VR::LO, "B").unwrap()).is_err());
        assert_eq!(e.value().first_str(), Some("A"));
        e.set_value(Value::str(VR::PN, "B").unwrap()).unwrap();
        assert_eq!(e.value().first_str(), Some("B"));
    }

    #[test]
    fn display_resolves_name() {
        let dict = patient_name_dict();
        let e = DataElement::from_value(
            Tag(0x0010, 0x0010),
            Value::str(VR::PN, "Doe^John").unwrap(),
        );
        assert_eq!(e.name(&dict), Some("Patient's Name"));
        assert_eq!(e.keyword(&dict), Some("PatientName"));
        assert_eq!(
            e.display_with(&dict).to_string(),
            "(0010,0010) PN [Patient's Name] = Doe^John"
        );

        let other = DataElement::from_value(Tag(0x0011, 0x1010), Value::Bytes(VR::UN, vec![]));
        assert_eq!(
            other.display_with(&dict).to_string(),
            "(0011,1010) UN [Unknown] = []"
        );
    }

    #[test]
    fn display_truncates_long_values() {
        let dict = patient_name_dict();
        let e = DataElement::from_value(
            Tag(0x0010, 0x4000),
            Value::str(VR::LT, "a".repeat(100)).unwrap(),
        );
        let text = e.display_with(&dict).to_string();
        assert!(text.ends_with(&format!("{}...", "a".repeat(80))));
    }
}
