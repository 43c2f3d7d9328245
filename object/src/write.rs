//! Writing DICOM files.
//!
//! The file meta group is always built anew from the data set
//! and the chosen transfer syntax,
//! replacing any group 0002 elements held by the data set.

use crate::file::{self, DICM_MAGIC_CODE, PREAMBLE_LENGTH};
use crate::DataSet;
use dcmkit_core::header::META_GROUP;
use dcmkit_core::uid::{self, IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use dcmkit_core::value::C;
use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::encode::{self, write_element};
use dcmkit_encoding::io::{ByteWriter, WriteError as ByteWriteError};
use dcmkit_encoding::transfer_syntax::{TransferSyntax, EXPLICIT_VR_LITTLE_ENDIAN};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// An error which may occur when writing a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Missing required attribute {}", tag))]
    MissingAttribute { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Invalid UID `{}` in {}", uid, tag))]
    InvalidUid {
        tag: Tag,
        uid: String,
        backtrace: Backtrace,
    },
    #[snafu(display("File '{}' already exists", path.display()))]
    TargetExists { path: PathBuf, backtrace: Backtrace },
    #[snafu(display("Could not create directory '{}'", path.display()))]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not create file '{}'", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble { source: ByteWriteError },
    #[snafu(display("Could not write file meta group"))]
    WriteMetaGroup {
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not write data set"))]
    WriteDataSet {
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not compress data set"))]
    Deflate {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not flush file '{}'", path.display()))]
    FlushFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not move temporary file to '{}'", path.display()))]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
        backtrace: Backtrace,
    },
    #[snafu(display("Written file '{}' could not be read back", path.display()))]
    Validate {
        path: PathBuf,
        #[snafu(source(from(file::ReadError, Box::new)))]
        source: Box<file::ReadError>,
    },
}

pub type Result<T, E = WriteError> = std::result::Result<T, E>;

/// Options for writing a DICOM file.
///
/// # Example
///
/// ```no_run
/// # use dcmkit_object::{DataSet, WriteOptions};
/// # fn run(ds: &DataSet) -> Result<(), Box<dyn std::error::Error>> {
/// use dcmkit_encoding::transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;
///
/// let options = WriteOptions::new()
///     .transfer_syntax(&IMPLICIT_VR_LITTLE_ENDIAN)
///     .overwrite(true);
/// dcmkit_object::write_file_with_options("out/0001.dcm", ds, &options)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// The transfer syntax of the data set body.
    /// Explicit VR little endian by default.
    pub transfer_syntax: &'static TransferSyntax,
    /// Whether an existing file may be replaced. `false` by default.
    pub overwrite: bool,
    /// Whether missing parent directories are created. `true` by default.
    pub create_dirs: bool,
    /// Whether to write to a temporary file first
    /// and move it into place when complete. `true` by default.
    pub atomic: bool,
    /// Whether to read the file back after writing. `false` by default.
    pub validate_after_write: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            transfer_syntax: &EXPLICIT_VR_LITTLE_ENDIAN,
            overwrite: false,
            create_dirs: true,
            atomic: true,
            validate_after_write: false,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }

    pub fn transfer_syntax(mut self, ts: &'static TransferSyntax) -> Self {
        self.transfer_syntax = ts;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn validate_after_write(mut self, validate: bool) -> Self {
        self.validate_after_write = validate;
        self
    }
}

/// Write a data set to a new DICOM file with the default options.
pub fn write_file<P>(path: P, dataset: &DataSet) -> Result<()>
where
    P: AsRef<Path>,
{
    write_file_with_options(path, dataset, &WriteOptions::default())
}

/// Write a data set to a DICOM file.
///
/// In atomic mode, the target is left untouched if anything fails.
pub fn write_file_with_options<P>(path: P, dataset: &DataSet, options: &WriteOptions) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    check_required_uids(dataset)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if options.create_dirs {
        fs::create_dir_all(dir).context(CreateDirectorySnafu { path: dir })?;
    }
    ensure!(
        options.overwrite || !path.exists(),
        TargetExistsSnafu { path }
    );

    let ts = options.transfer_syntax;
    if options.atomic {
        let mut tmp = NamedTempFile::new_in(dir).context(CreateFileSnafu { path: dir })?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            write_to(&mut out, dataset, ts)?;
            out.flush().context(FlushFileSnafu { path })?;
        }
        tmp.as_file()
            .sync_all()
            .context(FlushFileSnafu { path })?;
        if options.overwrite {
            tmp.persist(path).context(PersistSnafu { path })?;
        } else {
            tmp.persist_noclobber(path).context(PersistSnafu { path })?;
        }
    } else {
        let file = if options.overwrite {
            File::create(path)
        } else {
            OpenOptions::new().write(true).create_new(true).open(path)
        }
        .context(CreateFileSnafu { path })?;
        let mut out = BufWriter::new(file);
        write_to(&mut out, dataset, ts)?;
        out.flush().context(FlushFileSnafu { path })?;
    }
    debug!("Wrote {}", path.display());

    if options.validate_after_write {
        file::open_file(path).context(ValidateSnafu { path })?;
    }
    Ok(())
}

/// Write a data set as a complete DICOM file
/// (preamble, magic code, file meta group and body)
/// to the given writer.
pub fn write_to<W>(to: W, dataset: &DataSet, ts: &TransferSyntax) -> Result<()>
where
    W: Write,
{
    let (sop_class_uid, sop_instance_uid) = check_required_uids(dataset)?;

    // meta group, always explicit VR little endian
    let meta_ts = &EXPLICIT_VR_LITTLE_ENDIAN;
    let mut meta = ByteWriter::le(Vec::new());
    for elem in meta_elements(sop_class_uid, sop_instance_uid, ts) {
        write_element(&mut meta, &elem, meta_ts).context(WriteMetaGroupSnafu)?;
    }
    let meta = meta.into_inner();
    let group_length = DataElement::from_value(
        tags::FILE_META_INFORMATION_GROUP_LENGTH,
        Value::Ints(VR::UL, C::from_elem(meta.len() as i64, 1)),
    );

    let mut out = ByteWriter::le(to);
    out.write_bytes(&[0; PREAMBLE_LENGTH])
        .context(WritePreambleSnafu)?;
    out.write_bytes(&DICM_MAGIC_CODE)
        .context(WritePreambleSnafu)?;
    write_element(&mut out, &group_length, meta_ts).context(WriteMetaGroupSnafu)?;
    out.write_bytes(&meta).context(WritePreambleSnafu)?;

    let body = dataset.iter().filter(|e| e.tag().group() != META_GROUP);
    if ts.is_deflated() {
        let mut raw = ByteWriter::new(Vec::new(), ts.endianness());
        for elem in body {
            write_element(&mut raw, elem, ts).context(WriteDataSetSnafu)?;
        }
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&raw.into_inner())
            .context(DeflateSnafu)?;
        let compressed = encoder.finish().context(DeflateSnafu)?;
        out.write_bytes(&compressed).context(WritePreambleSnafu)?;
    } else {
        out.set_endianness(ts.endianness());
        for elem in body {
            write_element(&mut out, elem, ts).context(WriteDataSetSnafu)?;
        }
    }
    out.flush().context(WritePreambleSnafu)?;
    Ok(())
}

/// Ensure that the data set holds valid SOP Class and SOP Instance UIDs,
/// returning them.
fn check_required_uids(dataset: &DataSet) -> Result<(&str, &str)> {
    Ok((
        required_uid(dataset, tags::SOP_CLASS_UID)?,
        required_uid(dataset, tags::SOP_INSTANCE_UID)?,
    ))
}

fn required_uid(dataset: &DataSet, tag: Tag) -> Result<&str> {
    let uid = dataset
        .string(tag)
        .context(MissingAttributeSnafu { tag })?;
    ensure!(uid::is_valid(uid), InvalidUidSnafu { tag, uid });
    Ok(uid)
}

fn meta_elements(
    sop_class_uid: &str,
    sop_instance_uid: &str,
    ts: &TransferSyntax,
) -> [DataElement; 6] {
    let ui = |tag, uid: &str| {
        DataElement::from_value(tag, Value::Strs(VR::UI, C::from_elem(uid.to_string(), 1)))
    };
    [
        DataElement::from_value(
            tags::FILE_META_INFORMATION_VERSION,
            Value::Bytes(VR::OB, vec![0x00, 0x01]),
        ),
        ui(tags::MEDIA_STORAGE_SOP_CLASS_UID, sop_class_uid),
        ui(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, sop_instance_uid),
        ui(tags::TRANSFER_SYNTAX_UID, ts.uid()),
        ui(tags::IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_CLASS_UID),
        DataElement::from_value(
            tags::IMPLEMENTATION_VERSION_NAME,
            Value::Strs(VR::SH, C::from_elem(IMPLEMENTATION_VERSION_NAME.to_string(), 1)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_encoding::transfer_syntax::{
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_BIG_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    fn sample() -> DataSet {
        let mut ds = DataSet::new();
        ds.set_string(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7")
            .unwrap();
        ds.set_string(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5")
            .unwrap();
        ds.set_patient_name("Doe^John").unwrap();
        ds.put(DataElement::from_value(
            tags::ROWS,
            Value::Ints(VR::US, C::from_slice(&[64])),
        ));
        ds.put(DataElement::from_value(
            tags::PIXEL_SPACING,
            Value::Strs(VR::DS, C::from_vec(vec!["0.5".to_string(), "0.25".to_string()])),
        ));
        ds.put(DataElement::from_value(
            Tag(0x0009, 0x1001),
            Value::Bytes(VR::UN, vec![1, 2, 3, 4]),
        ));
        ds
    }

    fn body(ds: &DataSet) -> Vec<&DataElement> {
        ds.iter().filter(|e| e.tag().group() != META_GROUP).collect()
    }

    #[test]
    fn meta_group_layout() {
        let mut out = Vec::new();
        write_to(&mut out, &sample(), &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert!(out[..PREAMBLE_LENGTH].iter().all(|&b| b == 0));
        assert_eq!(&out[128..132], b"DICM");
        // (0002,0000) UL, len 4
        assert_eq!(&out[132..140], &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
        let group_len = u32::from_le_bytes([out[140], out[141], out[142], out[143]]);
        // (0002,0001) OB follows, with reserved bytes and a 32-bit length
        assert_eq!(&out[144..156], &[0x02, 0x00, 0x01, 0x00, b'O', b'B', 0, 0, 2, 0, 0, 0]);

        let ds = file::read_from(&out[..]).unwrap();
        let meta = ds.file_meta_information();
        assert_eq!(meta.len(), 7);
        assert_eq!(
            meta.string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID),
            Some("1.2.3.4.5")
        );
        assert_eq!(meta.string(tags::IMPLEMENTATION_CLASS_UID), Some(IMPLEMENTATION_CLASS_UID));
        assert_eq!(
            meta.string(tags::IMPLEMENTATION_VERSION_NAME),
            Some(IMPLEMENTATION_VERSION_NAME)
        );
        // the group length covers everything up to the body
        let body_start = 144 + group_len as usize;
        assert_eq!(&out[body_start..body_start + 2], &[0x08, 0x00]);
    }

    #[test]
    fn stale_meta_is_replaced() {
        let mut ds = sample();
        ds.set_string(tags::TRANSFER_SYNTAX_UID, VR::UI, "1.2.840.10008.1.2.2")
            .unwrap();
        ds.set_string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, "9.9.9")
            .unwrap();
        let mut out = Vec::new();
        write_to(&mut out, &ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        let back = file::read_from(&out[..]).unwrap();
        assert_eq!(
            back.string(tags::TRANSFER_SYNTAX_UID),
            Some("1.2.840.10008.1.2.1")
        );
        assert_eq!(
            back.string(tags::MEDIA_STORAGE_SOP_INSTANCE_UID),
            Some("1.2.3.4.5")
        );
    }

    #[test]
    fn body_round_trips_in_every_uncompressed_syntax() {
        let ds = sample();
        for ts in [
            &EXPLICIT_VR_LITTLE_ENDIAN,
            &EXPLICIT_VR_BIG_ENDIAN,
            &IMPLICIT_VR_LITTLE_ENDIAN,
            &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        ] {
            let mut out = Vec::new();
            write_to(&mut out, &ds, ts).unwrap();
            let back = file::read_from(&out[..]).unwrap();
            assert_eq!(body(&back), body(&ds), "round trip in {}", ts.name());
        }
    }

    #[test]
    fn required_uids_are_checked() {
        let mut ds = sample();
        ds.take(tags::SOP_CLASS_UID);
        let err = write_to(Vec::new(), &ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, WriteError::MissingAttribute { tag, .. } if tag == tags::SOP_CLASS_UID));

        let mut ds = sample();
        ds.set_string(tags::SOP_INSTANCE_UID, VR::UI, "1.02.3").unwrap();
        let err = write_to(Vec::new(), &ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, WriteError::InvalidUid { .. }));
    }

    #[test]
    fn write_file_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/0001.dcm");
        let ds = sample();

        write_file(&path, &ds).unwrap();
        assert!(path.is_file());

        // no overwrite by default
        let err = write_file(&path, &ds).unwrap_err();
        assert!(matches!(err, WriteError::TargetExists { .. }));

        let options = WriteOptions::new()
            .overwrite(true)
            .atomic(false)
            .validate_after_write(true);
        write_file_with_options(&path, &ds, &options).unwrap();

        let no_dirs = WriteOptions::new().create_dirs(false);
        let err = write_file_with_options(dir.path().join("c/0001.dcm"), &ds, &no_dirs)
            .unwrap_err();
        assert!(matches!(err, WriteError::CreateFile { .. }));

        // no temporary files left behind
        let names: Vec<_> = fs::read_dir(dir.path().join("a/b"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("0001.dcm")]);
    }

    #[test]
    fn failed_write_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0001.dcm");
        fs::write(&path, b"previous").unwrap();

        let mut ds = sample();
        // too long for the 16-bit length of LT
        ds.put(DataElement::from_value(
            Tag(0x0010, 0x4000),
            Value::Strs(VR::LT, C::from_elem("A".repeat(70_000), 1)),
        ));
        let options = WriteOptions::new().overwrite(true);
        let err = write_file_with_options(&path, &ds, &options).unwrap_err();
        assert!(matches!(err, WriteError::WriteDataSet { .. }));
        assert_eq!(fs::read(&path).unwrap(), b"previous");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
