//! Building tags, values and elements from outside the crate.

use dcmkit_core::{uid, DataElement, Tag, Value, VR};

#[test]
fn tags_parse_and_display() {
    let tag: Tag = "(0010,0010)".parse().unwrap();
    assert_eq!(tag, Tag(0x0010, 0x0010));
    assert_eq!("7FE0,0010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
    assert_eq!(Tag(0x0009, 0x10AB).to_string(), "(0009,10AB)");
    assert!(Tag(0x0009, 0x10AB).is_private());
    assert!(Tag(0x0002, 0x0010).is_meta());
    assert!("(0010,00".parse::<Tag>().is_err());
}

#[test]
fn checked_values() {
    let value = Value::strs(VR::CS, ["ORIGINAL", "PRIMARY"]).unwrap();
    assert_eq!(value.to_str(), "ORIGINAL\\PRIMARY");
    assert_eq!(value.multiplicity(), 2);

    assert!(Value::str(VR::CS, "A CODE STRING THAT IS FAR TOO LONG").is_err());
    assert!(Value::ints(VR::US, [70_000]).is_err());
    assert!(Value::ints(VR::FD, [1]).is_err());
    assert!(Value::empty(VR::PN).is_empty());
}

#[test]
fn elements_keep_their_vr() {
    let mut elem = DataElement::new(
        Tag(0x0010, 0x0010),
        VR::PN,
        Value::str(VR::PN, "Doe^John").unwrap(),
    )
    .unwrap();
    assert!(elem.set_value(Value::str(VR::LO, "Doe").unwrap()).is_err());
    assert_eq!(elem.value().to_str(), "Doe^John");

    elem.set_value(Value::str(VR::PN, "Roe^Jane").unwrap()).unwrap();
    assert_eq!(elem.value().first_str(), Some("Roe^Jane"));

    assert!(DataElement::new(Tag(0x0028, 0x0010), VR::US, Value::empty(VR::UL)).is_err());
}

#[test]
fn generated_uids_are_valid_and_unique() {
    let a = uid::generate();
    let b = uid::generate();
    assert_ne!(a, b);
    assert!(uid::is_valid(&a));
    assert!(a.starts_with(uid::UID_ROOT));
    assert!(uid::is_valid(&uid::generate_with_root("1.2.3")));
    assert!(!uid::is_valid("1.02.3"));
    assert!(!uid::is_valid("1..3"));
}
