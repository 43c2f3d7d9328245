//! Data element tag declarations
//!
//! This module contains the tag constants of the attributes
//! known to the standard data dictionary,
//! and the dictionary entries themselves.
//!
//! Repeating groups (`50xx`, `60xx`) are declared
//! with the `xx` portion zeroed.

use dcmkit_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*};
use dcmkit_core::header::{Tag, VR::*};

/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// IssuerOfAccessionNumberSequence (0008,0051) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// QueryRetrieveLevel (0008,0052) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054) AE 1-n
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056) CS 1
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS 1-n
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// ConversionType (0008,0064) CS 1
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS 1
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST 1
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH 1-n
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// ConsultingPhysicianName (0008,009C) PN 1-n
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// TimezoneOffsetFromUTC (0008,0201) SH 1
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO 1
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PhysiciansOfRecord (0008,1048) PN 1-n
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PerformingPhysicianName (0008,1050) PN 1-n
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// NameOfPhysiciansReadingStudy (0008,1060) PN 1-n
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// OperatorsName (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// AdmittingDiagnosesDescription (0008,1080) LO 1-n
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DerivationDescription (0008,2111) ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// IrradiationEventUID (0008,3010) UI 1-n
#[rustfmt::skip]
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// DerivationCodeSequence (0008,9215) SQ 1
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000) LO 1-n RET
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ 1
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientBirthName (0010,1005) PN 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// PatientMotherBirthName (0010,1060) PN 1
#[rustfmt::skip]
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// MilitaryRank (0010,1080) LO 1
#[rustfmt::skip]
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// BranchOfService (0010,1081) LO 1
#[rustfmt::skip]
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// MedicalRecordLocator (0010,1090) LO 1 RET
#[rustfmt::skip]
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// CountryOfResidence (0010,2150) LO 1
#[rustfmt::skip]
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// RegionOfResidence (0010,2152) LO 1
#[rustfmt::skip]
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// PatientTelephoneNumbers (0010,2154) SH 1-n
#[rustfmt::skip]
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// EthnicGroup (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH 1
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// AdditionalPatientHistory (0010,21B0) LT 1
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US 1
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// PatientSpeciesDescription (0010,2201) LO 1
#[rustfmt::skip]
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// PatientSexNeutered (0010,2203) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// PatientBreedDescription (0010,2292) LO 1
#[rustfmt::skip]
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
/// ResponsiblePerson (0010,2297) PN 1
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// ResponsibleOrganization (0010,2299) LO 1
#[rustfmt::skip]
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// PatientComments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// PatientIdentityRemoved (0012,0062) CS 1
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO 1-n
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// DeidentificationMethodCodeSequence (0012,0064) SQ 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// ContrastBolusAgent (0018,0010) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS 1-n
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS 1
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// PatientPosition (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI 1
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// FrameComments (0020,9158) LT 1
#[rustfmt::skip]
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US or SS 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LUTData (0028,3006) US or OW 1-n
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// RequestingPhysician (0032,1032) PN 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestingService (0032,1033) LO 1
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// RequestedProcedureDescription (0032,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// StudyComments (0032,4000) LT 1 RET
#[rustfmt::skip]
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// CurrentPatientLocation (0038,0300) LO 1
#[rustfmt::skip]
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// PatientInstitutionResidence (0038,0400) LO 1
#[rustfmt::skip]
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// ScheduledProcedureStepID (0040,0009) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// PerformedProcedureStepStartDate (0040,0244) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepEndDate (0040,0250) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// PerformedProcedureStepEndTime (0040,0251) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// PerformedProcedureStepID (0040,0253) SH 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// RequestAttributesSequence (0040,0275) SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// RequestedProcedureID (0040,1001) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// PersonAddress (0040,1102) ST 1
#[rustfmt::skip]
pub const PERSON_ADDRESS: Tag = Tag(0x0040, 0x1102);
/// PersonTelephoneNumbers (0040,1103) LO 1-n
#[rustfmt::skip]
pub const PERSON_TELEPHONE_NUMBERS: Tag = Tag(0x0040, 0x1103);
/// ValueType (0040,A040) CS 1
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// PersonName (0040,A123) PN 1
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI 1
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// TextValue (0040,A160) UT 1
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// StorageMediaFileSetUID (0088,0140) UI 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// ModifiedAttributesSequence (0400,0550) SQ 1
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// OriginalAttributesSequence (0400,0561) SQ 1
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// TextString (2030,0020) LO 1
#[rustfmt::skip]
pub const TEXT_STRING: Tag = Tag(0x2030, 0x0020);
/// ReferencedFrameOfReferenceUID (3006,0024) UI 1
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// TextComments (4000,4000) LT 1 RET
#[rustfmt::skip]
pub const TEXT_COMMENTS: Tag = Tag(0x4000, 0x4000);
/// CurveDimensions (50xx,0005) US 1 RET
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// NumberOfPoints (50xx,0010) US 1 RET
#[rustfmt::skip]
pub const NUMBER_OF_POINTS: Tag = Tag(0x5000, 0x0010);
/// TypeOfData (50xx,0020) CS 1 RET
#[rustfmt::skip]
pub const TYPE_OF_DATA: Tag = Tag(0x5000, 0x0020);
/// CurveData (50xx,3000) OB or OW 1 RET
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// OverlayRows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (60xx,3000) OB or OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB or OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", name: "File Meta Information Group Length", vr: Exact(UL), vm: "1", retired: false },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", name: "File Meta Information Version", vr: Exact(OB), vm: "1", retired: false },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", name: "Media Storage SOP Class UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", name: "Media Storage SOP Instance UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", name: "Transfer Syntax UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", name: "Implementation Class UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", name: "Implementation Version Name", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", name: "Source Application Entity Title", vr: Exact(AE), vm: "1", retired: false },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", name: "Sending Application Entity Title", vr: Exact(AE), vm: "1", retired: false },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", name: "Receiving Application Entity Title", vr: Exact(AE), vm: "1", retired: false },
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", name: "Private Information Creator UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", name: "Private Information", vr: Exact(OB), vm: "1", retired: false },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", name: "Specific Character Set", vr: Exact(CS), vm: "1-n", retired: false },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", name: "Image Type", vr: Exact(CS), vm: "2-n", retired: false },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", name: "Instance Creation Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", name: "Instance Creation Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", name: "Instance Creator UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", name: "SOP Class UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", name: "SOP Instance UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", name: "Study Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", name: "Series Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", name: "Acquisition Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", name: "Content Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", name: "Acquisition DateTime", vr: Exact(DT), vm: "1", retired: false },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", name: "Study Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", name: "Series Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", name: "Acquisition Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", name: "Content Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", name: "Accession Number", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(ISSUER_OF_ACCESSION_NUMBER_SEQUENCE), alias: "IssuerOfAccessionNumberSequence", name: "Issuer of Accession Number Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(QUERY_RETRIEVE_LEVEL), alias: "QueryRetrieveLevel", name: "Query/Retrieve Level", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(RETRIEVE_AE_TITLE), alias: "RetrieveAETitle", name: "Retrieve AE Title", vr: Exact(AE), vm: "1-n", retired: false },
    E { tag: Single(INSTANCE_AVAILABILITY), alias: "InstanceAvailability", name: "Instance Availability", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(MODALITY), alias: "Modality", name: "Modality", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(MODALITIES_IN_STUDY), alias: "ModalitiesInStudy", name: "Modalities in Study", vr: Exact(CS), vm: "1-n", retired: false },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", name: "Conversion Type", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(PRESENTATION_INTENT_TYPE), alias: "PresentationIntentType", name: "Presentation Intent Type", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", name: "Manufacturer", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", name: "Institution Name", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", name: "Institution Address", vr: Exact(ST), vm: "1", retired: false },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", name: "Referring Physician's Name", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(REFERRING_PHYSICIAN_ADDRESS), alias: "ReferringPhysicianAddress", name: "Referring Physician's Address", vr: Exact(ST), vm: "1", retired: false },
    E { tag: Single(REFERRING_PHYSICIAN_TELEPHONE_NUMBERS), alias: "ReferringPhysicianTelephoneNumbers", name: "Referring Physician's Telephone Numbers", vr: Exact(SH), vm: "1-n", retired: false },
    E { tag: Single(REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ReferringPhysicianIdentificationSequence", name: "Referring Physician Identification Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(CONSULTING_PHYSICIAN_NAME), alias: "ConsultingPhysicianName", name: "Consulting Physician's Name", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", name: "Code Value", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", name: "Coding Scheme Designator", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", name: "Code Meaning", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", name: "Timezone Offset From UTC", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(STATION_NAME), alias: "StationName", name: "Station Name", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", name: "Study Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", name: "Procedure Code Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", name: "Series Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", name: "Institutional Department Name", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PHYSICIANS_OF_RECORD), alias: "PhysiciansOfRecord", name: "Physician(s) of Record", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", name: "Performing Physician's Name", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(NAME_OF_PHYSICIANS_READING_STUDY), alias: "NameOfPhysiciansReadingStudy", name: "Name of Physician(s) Reading Study", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", name: "Operators' Name", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(ADMITTING_DIAGNOSES_DESCRIPTION), alias: "AdmittingDiagnosesDescription", name: "Admitting Diagnoses Description", vr: Exact(LO), vm: "1-n", retired: false },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", name: "Manufacturer's Model Name", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", name: "Referenced Study Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedPerformedProcedureStepSequence", name: "Referenced Performed Procedure Step Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", name: "Referenced Series Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REFERENCED_PATIENT_SEQUENCE), alias: "ReferencedPatientSequence", name: "Referenced Patient Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", name: "Referenced Image Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", name: "Referenced SOP Class UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", name: "Referenced SOP Instance UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", name: "Derivation Description", vr: Exact(ST), vm: "1", retired: false },
    E { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", name: "Source Image Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(IRRADIATION_EVENT_UID), alias: "IrradiationEventUID", name: "Irradiation Event UID", vr: Exact(UI), vm: "1-n", retired: false },
    E { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", name: "Derivation Code Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", name: "Patient's Name", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(PATIENT_ID), alias: "PatientID", name: "Patient ID", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", name: "Issuer of Patient ID", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", name: "Patient's Birth Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", name: "Patient's Birth Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", name: "Patient's Sex", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(OTHER_PATIENT_IDS), alias: "OtherPatientIDs", name: "Other Patient IDs", vr: Exact(LO), vm: "1-n", retired: true },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", name: "Other Patient Names", vr: Exact(PN), vm: "1-n", retired: false },
    E { tag: Single(OTHER_PATIENT_IDS_SEQUENCE), alias: "OtherPatientIDsSequence", name: "Other Patient IDs Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(PATIENT_BIRTH_NAME), alias: "PatientBirthName", name: "Patient's Birth Name", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", name: "Patient's Age", vr: Exact(AS), vm: "1", retired: false },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", name: "Patient's Size", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", name: "Patient's Weight", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(PATIENT_ADDRESS), alias: "PatientAddress", name: "Patient's Address", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_MOTHER_BIRTH_NAME), alias: "PatientMotherBirthName", name: "Patient's Mother's Birth Name", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(MILITARY_RANK), alias: "MilitaryRank", name: "Military Rank", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(BRANCH_OF_SERVICE), alias: "BranchOfService", name: "Branch of Service", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(MEDICAL_RECORD_LOCATOR), alias: "MedicalRecordLocator", name: "Medical Record Locator", vr: Exact(LO), vm: "1", retired: true },
    E { tag: Single(COUNTRY_OF_RESIDENCE), alias: "CountryOfResidence", name: "Country of Residence", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REGION_OF_RESIDENCE), alias: "RegionOfResidence", name: "Region of Residence", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_TELEPHONE_NUMBERS), alias: "PatientTelephoneNumbers", name: "Patient's Telephone Numbers", vr: Exact(SH), vm: "1-n", retired: false },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", name: "Ethnic Group", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(OCCUPATION), alias: "Occupation", name: "Occupation", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(ADDITIONAL_PATIENT_HISTORY), alias: "AdditionalPatientHistory", name: "Additional Patient History", vr: Exact(LT), vm: "1", retired: false },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", name: "Pregnancy Status", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(PATIENT_SPECIES_DESCRIPTION), alias: "PatientSpeciesDescription", name: "Patient Species Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_SEX_NEUTERED), alias: "PatientSexNeutered", name: "Patient's Sex Neutered", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(PATIENT_BREED_DESCRIPTION), alias: "PatientBreedDescription", name: "Patient Breed Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(RESPONSIBLE_PERSON), alias: "ResponsiblePerson", name: "Responsible Person", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(RESPONSIBLE_ORGANIZATION), alias: "ResponsibleOrganization", name: "Responsible Organization", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", name: "Patient Comments", vr: Exact(LT), vm: "1", retired: false },
    E { tag: Single(PATIENT_IDENTITY_REMOVED), alias: "PatientIdentityRemoved", name: "Patient Identity Removed", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(DEIDENTIFICATION_METHOD), alias: "DeidentificationMethod", name: "De-identification Method", vr: Exact(LO), vm: "1-n", retired: false },
    E { tag: Single(DEIDENTIFICATION_METHOD_CODE_SEQUENCE), alias: "DeidentificationMethodCodeSequence", name: "De-identification Method Code Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(CONTRAST_BOLUS_AGENT), alias: "ContrastBolusAgent", name: "Contrast/Bolus Agent", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", name: "Body Part Examined", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(SCANNING_SEQUENCE), alias: "ScanningSequence", name: "Scanning Sequence", vr: Exact(CS), vm: "1-n", retired: false },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", name: "Slice Thickness", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(KVP), alias: "KVP", name: "KVP", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", name: "Spacing Between Slices", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", name: "Device Serial Number", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", name: "Software Versions", vr: Exact(LO), vm: "1-n", retired: false },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", name: "Protocol Name", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", name: "Exposure Time", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", name: "X-Ray Tube Current", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(EXPOSURE), alias: "Exposure", name: "Exposure", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", name: "Patient Position", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", name: "Study Instance UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", name: "Series Instance UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(STUDY_ID), alias: "StudyID", name: "Study ID", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", name: "Series Number", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", name: "Acquisition Number", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", name: "Instance Number", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", name: "Patient Orientation", vr: Exact(CS), vm: "2", retired: false },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", name: "Image Position (Patient)", vr: Exact(DS), vm: "3", retired: false },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", name: "Image Orientation (Patient)", vr: Exact(DS), vm: "6", retired: false },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", name: "Frame of Reference UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(LATERALITY), alias: "Laterality", name: "Laterality", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(SYNCHRONIZATION_FRAME_OF_REFERENCE_UID), alias: "SynchronizationFrameOfReferenceUID", name: "Synchronization Frame of Reference UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", name: "Slice Location", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", name: "Image Comments", vr: Exact(LT), vm: "1", retired: false },
    E { tag: Single(FRAME_COMMENTS), alias: "FrameComments", name: "Frame Comments", vr: Exact(LT), vm: "1", retired: false },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", name: "Samples per Pixel", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", name: "Photometric Interpretation", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", name: "Planar Configuration", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", name: "Number of Frames", vr: Exact(IS), vm: "1", retired: false },
    E { tag: Single(ROWS), alias: "Rows", name: "Rows", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(COLUMNS), alias: "Columns", name: "Columns", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", name: "Pixel Spacing", vr: Exact(DS), vm: "2", retired: false },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", name: "Bits Allocated", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(BITS_STORED), alias: "BitsStored", name: "Bits Stored", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(HIGH_BIT), alias: "HighBit", name: "High Bit", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", name: "Pixel Representation", vr: Exact(US), vm: "1", retired: false },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", name: "Smallest Image Pixel Value", vr: Xs, vm: "1", retired: false },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", name: "Largest Image Pixel Value", vr: Xs, vm: "1", retired: false },
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", name: "Pixel Padding Value", vr: Xs, vm: "1", retired: false },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", name: "Window Center", vr: Exact(DS), vm: "1-n", retired: false },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", name: "Window Width", vr: Exact(DS), vm: "1-n", retired: false },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", name: "Rescale Intercept", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", name: "Rescale Slope", vr: Exact(DS), vm: "1", retired: false },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", name: "Rescale Type", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", name: "Lossy Image Compression", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(LUT_DATA), alias: "LUTData", name: "LUT Data", vr: Lt, vm: "1-n", retired: false },
    E { tag: Single(REQUESTING_PHYSICIAN), alias: "RequestingPhysician", name: "Requesting Physician", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(REQUESTING_SERVICE), alias: "RequestingService", name: "Requesting Service", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", name: "Requested Procedure Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REQUESTED_PROCEDURE_CODE_SEQUENCE), alias: "RequestedProcedureCodeSequence", name: "Requested Procedure Code Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(STUDY_COMMENTS), alias: "StudyComments", name: "Study Comments", vr: Exact(LT), vm: "1", retired: true },
    E { tag: Single(CURRENT_PATIENT_LOCATION), alias: "CurrentPatientLocation", name: "Current Patient Location", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(PATIENT_INSTITUTION_RESIDENCE), alias: "PatientInstitutionResidence", name: "Patient's Institution Residence", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_ID), alias: "ScheduledProcedureStepID", name: "Scheduled Procedure Step ID", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", name: "Performed Procedure Step Start Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", name: "Performed Procedure Step Start Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_END_DATE), alias: "PerformedProcedureStepEndDate", name: "Performed Procedure Step End Date", vr: Exact(DA), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_END_TIME), alias: "PerformedProcedureStepEndTime", name: "Performed Procedure Step End Time", vr: Exact(TM), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_ID), alias: "PerformedProcedureStepID", name: "Performed Procedure Step ID", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", name: "Performed Procedure Step Description", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", name: "Request Attributes Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(REQUESTED_PROCEDURE_ID), alias: "RequestedProcedureID", name: "Requested Procedure ID", vr: Exact(SH), vm: "1", retired: false },
    E { tag: Single(PERSON_ADDRESS), alias: "PersonAddress", name: "Person's Address", vr: Exact(ST), vm: "1", retired: false },
    E { tag: Single(PERSON_TELEPHONE_NUMBERS), alias: "PersonTelephoneNumbers", name: "Person's Telephone Numbers", vr: Exact(LO), vm: "1-n", retired: false },
    E { tag: Single(VALUE_TYPE), alias: "ValueType", name: "Value Type", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Single(PERSON_NAME), alias: "PersonName", name: "Person Name", vr: Exact(PN), vm: "1", retired: false },
    E { tag: Single(UID), alias: "UID", name: "UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(TEXT_VALUE), alias: "TextValue", name: "Text Value", vr: Exact(UT), vm: "1", retired: false },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", name: "Content Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(STORAGE_MEDIA_FILE_SET_UID), alias: "StorageMediaFileSetUID", name: "Storage Media File-set UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(MODIFIED_ATTRIBUTES_SEQUENCE), alias: "ModifiedAttributesSequence", name: "Modified Attributes Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(ORIGINAL_ATTRIBUTES_SEQUENCE), alias: "OriginalAttributesSequence", name: "Original Attributes Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(TEXT_STRING), alias: "TextString", name: "Text String", vr: Exact(LO), vm: "1", retired: false },
    E { tag: Single(REFERENCED_FRAME_OF_REFERENCE_UID), alias: "ReferencedFrameOfReferenceUID", name: "Referenced Frame of Reference UID", vr: Exact(UI), vm: "1", retired: false },
    E { tag: Single(TEXT_COMMENTS), alias: "TextComments", name: "Text Comments", vr: Exact(LT), vm: "1", retired: true },
    E { tag: Group100(CURVE_DIMENSIONS), alias: "CurveDimensions", name: "Curve Dimensions", vr: Exact(US), vm: "1", retired: true },
    E { tag: Group100(NUMBER_OF_POINTS), alias: "NumberOfPoints", name: "Number of Points", vr: Exact(US), vm: "1", retired: true },
    E { tag: Group100(TYPE_OF_DATA), alias: "TypeOfData", name: "Type of Data", vr: Exact(CS), vm: "1", retired: true },
    E { tag: Group100(CURVE_DATA), alias: "CurveData", name: "Curve Data", vr: Ox, vm: "1", retired: true },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", name: "Overlay Rows", vr: Exact(US), vm: "1", retired: false },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", name: "Overlay Columns", vr: Exact(US), vm: "1", retired: false },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", name: "Overlay Type", vr: Exact(CS), vm: "1", retired: false },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", name: "Overlay Origin", vr: Exact(SS), vm: "2", retired: false },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", name: "Overlay Bits Allocated", vr: Exact(US), vm: "1", retired: false },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", name: "Overlay Bit Position", vr: Exact(US), vm: "1", retired: false },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", name: "Overlay Data", vr: Ox, vm: "1", retired: false },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", name: "Float Pixel Data", vr: Exact(OF), vm: "1", retired: false },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", name: "Double Float Pixel Data", vr: Exact(OD), vm: "1", retired: false },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", name: "Pixel Data", vr: Px, vm: "1", retired: false },
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", name: "Digital Signatures Sequence", vr: Exact(SQ), vm: "1", retired: false },
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", name: "Data Set Trailing Padding", vr: Exact(OB), vm: "1", retired: false },
];
