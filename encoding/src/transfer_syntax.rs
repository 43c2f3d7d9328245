//! Transfer syntax descriptors and the built-in registry.
//!
//! A transfer syntax determines whether value representations
//! are written explicitly, the byte order of the data set body,
//! whether the body is deflated,
//! and whether pixel data may be encapsulated.

use byteordered::Endianness;
use dcmkit_dictionary_std::uids;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferSyntax {
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    explicit_vr: bool,
    deflated: bool,
    encapsulated: bool,
}

impl TransferSyntax {
    /// Create a transfer syntax specifier.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        deflated: bool,
        encapsulated: bool,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            deflated,
            encapsulated,
        }
    }

    /// Create an explicit VR little endian transfer syntax
    /// with encapsulated pixel data.
    const fn new_encapsulated(uid: &'static str, name: &'static str) -> Self {
        TransferSyntax::new(uid, name, Endianness::Little, true, false, true)
    }

    /// The unique identifier of this transfer syntax.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// The human readable name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The byte order of the data set body.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether value representations are written in the stream.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Whether the data set body is compressed with DEFLATE.
    pub const fn is_deflated(&self) -> bool {
        self.deflated
    }

    /// Whether pixel data is encapsulated in fragments.
    pub const fn is_encapsulated(&self) -> bool {
        self.encapsulated
    }
}

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    false,
    false,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    false,
    false,
);

/// Explicit VR Big Endian (retired)
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    false,
    false,
);

/// Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    true,
    false,
);

/// RLE Lossless
pub const RLE_LOSSLESS: TransferSyntax =
    TransferSyntax::new_encapsulated(uids::RLE_LOSSLESS, "RLE Lossless");

/// JPEG Baseline (Process 1)
pub const JPEG_BASELINE: TransferSyntax =
    TransferSyntax::new_encapsulated(uids::JPEG_BASELINE8_BIT, "JPEG Baseline (Process 1)");

/// JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG_EXTENDED12_BIT,
    "JPEG Extended (Process 2 & 4)",
);

/// JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG_LOSSLESS,
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_FIRST_ORDER: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG_LOSSLESS_SV1,
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);

/// JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG_LS_LOSSLESS,
    "JPEG-LS Lossless Image Compression",
);

/// JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_NEAR_LOSSLESS: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG_LS_NEAR_LOSSLESS,
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
);

/// JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_LOSSLESS: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::JPEG2000_LOSSLESS,
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// JPEG 2000 Image Compression
pub const JPEG_2000: TransferSyntax =
    TransferSyntax::new_encapsulated(uids::JPEG2000, "JPEG 2000 Image Compression");

/// High-Throughput JPEG 2000 Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::HTJ2K_LOSSLESS,
    "High-Throughput JPEG 2000 Image Compression (Lossless Only)",
);

/// High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS_RPCL: TransferSyntax = TransferSyntax::new_encapsulated(
    uids::HTJ2K_LOSSLESS_RPCL,
    "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)",
);

/// High-Throughput JPEG 2000 Image Compression
pub const HTJ2K: TransferSyntax =
    TransferSyntax::new_encapsulated(uids::HTJ2K, "High-Throughput JPEG 2000 Image Compression");

static BUILT_IN: &[TransferSyntax] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    RLE_LOSSLESS,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LOSSLESS_FIRST_ORDER,
    JPEG_LS_LOSSLESS,
    JPEG_LS_NEAR_LOSSLESS,
    JPEG_2000_LOSSLESS,
    JPEG_2000,
    HTJ2K_LOSSLESS,
    HTJ2K_LOSSLESS_RPCL,
    HTJ2K,
];

static REGISTRY: Lazy<HashMap<&'static str, &'static TransferSyntax>> =
    Lazy::new(|| BUILT_IN.iter().map(|ts| (ts.uid(), ts)).collect());

/// Look up a transfer syntax by its UID.
///
/// Trailing NUL and space padding is ignored.
pub fn lookup(uid: &str) -> Option<&'static TransferSyntax> {
    REGISTRY
        .get(uid.trim_end_matches(|c: char| c == '\0' || c == ' '))
        .copied()
}

/// Iterate over all transfer syntaxes known to this library.
pub fn all() -> impl Iterator<Item = &'static TransferSyntax> {
    BUILT_IN.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_syntaxes() {
        let ts = lookup("1.2.840.10008.1.2").unwrap();
        assert!(!ts.is_explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);

        let ts = lookup("1.2.840.10008.1.2.2\0").unwrap();
        assert!(ts.is_explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Big);
        assert_eq!(ts.name(), "Explicit VR Big Endian");

        let ts = lookup("1.2.840.10008.1.2.1.99 ").unwrap();
        assert!(ts.is_deflated());
        assert!(!ts.is_encapsulated());

        let ts = lookup("1.2.840.10008.1.2.4.50").unwrap();
        assert!(ts.is_encapsulated());
        assert!(ts.is_explicit_vr());
    }

    #[test]
    fn lookup_unknown_syntax() {
        assert_eq!(lookup("1.2.3.4"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn registry_is_consistent() {
        assert_eq!(all().count(), REGISTRY.len());
        for ts in all() {
            assert_eq!(lookup(ts.uid()), Some(ts));
            assert!(dcmkit_core::uid::is_valid(ts.uid()));
        }
    }
}
