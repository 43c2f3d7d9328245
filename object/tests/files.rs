//! Writing data sets to files and reading them back.

use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN;
use dcmkit_object::{open_file, write_file, write_file_with_options, DataSet, WriteOptions};

fn minimal() -> DataSet {
    let mut ds = DataSet::new();
    ds.set_string(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.1")
        .unwrap();
    ds.set_string(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5")
        .unwrap();
    ds.set_study_instance_uid("1.2.3.4.6").unwrap();
    ds.set_series_instance_uid("1.2.3.4.7").unwrap();
    ds.set_patient_id("PAT001").unwrap();
    ds.set_patient_name("Test^Patient").unwrap();
    ds
}

#[test]
fn minimal_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal.dcm");
    let ds = minimal();
    write_file(&path, &ds).unwrap();

    let parsed = open_file(&path).unwrap();
    for tag in [
        tags::SOP_CLASS_UID,
        tags::SOP_INSTANCE_UID,
        tags::STUDY_INSTANCE_UID,
        tags::SERIES_INSTANCE_UID,
        tags::PATIENT_ID,
        tags::PATIENT_NAME,
    ] {
        assert_eq!(parsed.string(tag), ds.string(tag), "mismatch at {}", tag);
    }

    // the file meta group was generated
    assert_eq!(
        parsed.string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID),
        Some("1.2.3.4.5")
    );
    assert_eq!(
        parsed.string(tags::TRANSFER_SYNTAX_UID),
        Some(EXPLICIT_VR_LITTLE_ENDIAN.uid())
    );
}

#[test]
fn body_elements_survive_explicit_vr_little_endian() {
    let mut ds = minimal();
    let elements = vec![
        DataElement::new(tags::MODALITY, VR::CS, Value::str(VR::CS, "CT").unwrap()).unwrap(),
        DataElement::new(
            Tag(0x0008, 0x0008),
            VR::CS,
            Value::strs(VR::CS, ["ORIGINAL", "PRIMARY", "AXIAL"]).unwrap(),
        )
        .unwrap(),
        DataElement::new(tags::STUDY_DATE, VR::DA, Value::str(VR::DA, "20240131").unwrap()).unwrap(),
        DataElement::new(tags::STUDY_TIME, VR::TM, Value::str(VR::TM, "101530").unwrap()).unwrap(),
        DataElement::new(tags::SERIES_NUMBER, VR::IS, Value::str(VR::IS, "3").unwrap()).unwrap(),
        DataElement::new(
            tags::PIXEL_SPACING,
            VR::DS,
            Value::strs(VR::DS, ["0.5", "0.5"]).unwrap(),
        )
        .unwrap(),
        DataElement::new(tags::ROWS, VR::US, Value::ints(VR::US, [512]).unwrap()).unwrap(),
        DataElement::new(Tag(0x0018, 0x9219), VR::SS, Value::ints(VR::SS, [-1]).unwrap()).unwrap(),
        DataElement::new(Tag(0x0028, 0x0106), VR::US, Value::empty(VR::US)).unwrap(),
        DataElement::new(
            Tag(0x0018, 0x9306),
            VR::FD,
            Value::floats(VR::FD, [0.625, 1.25]).unwrap(),
        )
        .unwrap(),
        DataElement::new(Tag(0x0018, 0x9327), VR::FL, Value::floats(VR::FL, [2.5]).unwrap()).unwrap(),
        DataElement::new(
            Tag(0x0020, 0x4000),
            VR::LT,
            Value::str(VR::LT, "free text with an odd length").unwrap(),
        )
        .unwrap(),
        DataElement::new(
            Tag(0x0009, 0x1010),
            VR::UN,
            Value::bytes(VR::UN, vec![1, 2, 3, 4]).unwrap(),
        )
        .unwrap(),
        DataElement::new(Tag(0x0008, 0x1140), VR::SQ, Value::empty(VR::SQ)).unwrap(),
        DataElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            Value::bytes(VR::OW, (0..32).collect::<Vec<u8>>()).unwrap(),
        )
        .unwrap(),
    ];
    for elem in elements {
        ds.put(elem);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/body.dcm");
    let options = WriteOptions::new()
        .transfer_syntax(&EXPLICIT_VR_LITTLE_ENDIAN)
        .atomic(true)
        .validate_after_write(true);
    write_file_with_options(&path, &ds, &options).unwrap();

    let parsed = open_file(&path).unwrap();
    for elem in ds.iter() {
        assert_eq!(parsed.get(elem.tag()), Some(elem), "mismatch at {}", elem.tag());
    }
    let body_len = parsed.tags().filter(|t| t.group() != 0x0002).count();
    assert_eq!(body_len, ds.len());
}

#[test]
fn writing_over_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("instance.dcm");
    let mut ds = minimal();
    write_file(&path, &ds).unwrap();

    ds.set_patient_name("Other^Name").unwrap();
    assert!(write_file(&path, &ds).is_err());
    assert_eq!(
        open_file(&path).unwrap().string(tags::PATIENT_NAME),
        Some("Test^Patient")
    );

    let options = WriteOptions::new().overwrite(true);
    write_file_with_options(&path, &ds, &options).unwrap();
    assert_eq!(
        open_file(&path).unwrap().string(tags::PATIENT_NAME),
        Some("Other^Name")
    );
}

#[test]
fn short_files_have_no_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.dcm");
    std::fs::write(&path, [0u8; 100]).unwrap();
    assert!(open_file(&path).is_err());
}
