//! Validation and generation of DICOM unique identifiers.
//!
//! A UID is a dot separated sequence of numeric components,
//! at most 64 characters long (PS3.5 section 9).

/// The organizational root under which this library generates UIDs.
pub const UID_ROOT: &str = "1.2.826.0.1.3680043.10.543";

/// The Implementation Class UID written to the file meta group.
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.10.543.1";

/// The Implementation Version Name written to the file meta group.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMKIT_010";

/// Maximum length of a UID in characters.
pub const MAX_UID_LENGTH: usize = 64;

/// Check whether the given text is a syntactically valid UID.
///
/// A valid UID is non-empty, at most 64 characters long,
/// does not start or end with a dot,
/// and each of its components is a non-empty run of digits
/// without a leading zero, unless the component is exactly `0`.
///
/// ```
/// # use dcmkit_core::uid::is_valid;
/// assert!(is_valid("1.2.840.10008.1.2.1"));
/// assert!(is_valid("1.0.3"));
/// assert!(!is_valid("1.02.3"));
/// assert!(!is_valid("1..2"));
/// ```
pub fn is_valid(uid: &str) -> bool {
    if uid.is_empty() || uid.len() > MAX_UID_LENGTH {
        return false;
    }
    if uid.starts_with('.') || uid.ends_with('.') {
        return false;
    }
    uid.split('.').all(|comp| {
        !comp.is_empty()
            && comp.bytes().all(|b| b.is_ascii_digit())
            && !(comp.len() > 1 && comp.starts_with('0'))
    })
}

/// Generate a new UID under [`UID_ROOT`].
///
/// The result is made of the root,
/// the current time in microseconds since the Unix epoch
/// and a random 32-bit suffix.
pub fn generate() -> String {
    generate_with_root(UID_ROOT)
}

/// Generate a new UID under the given root.
///
/// The caller is responsible for choosing a root
/// short enough to keep the result within 64 characters.
pub fn generate_with_root(root: &str) -> String {
    let micros = chrono::Utc::now().timestamp_micros();
    let suffix: u32 = rand::random();
    format!("{}.{}.{}", root, micros, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uids() {
        assert!(is_valid("1.2.3.4.5"));
        assert!(is_valid("1.2.840.10008.5.1.4.1.1.1"));
        assert!(is_valid("0"));
        assert!(is_valid("1"));
        assert!(is_valid("1.0.0.1"));
        assert!(is_valid(&format!("1.{}", "2".repeat(62))));
    }

    #[test]
    fn invalid_uids() {
        assert!(!is_valid(""));
        assert!(!is_valid(".1.2"));
        assert!(!is_valid("1.2."));
        assert!(!is_valid("1..2"));
        assert!(!is_valid("1.2a.3"));
        assert!(!is_valid("1.02.3"));
        assert!(!is_valid("1.2.3 "));
        assert!(!is_valid(&format!("1.{}", "2".repeat(63))));
    }

    #[test]
    fn generated_uids_are_valid_and_unique() {
        let a = generate();
        let b = generate();
        assert!(is_valid(&a), "{} should be valid", a);
        assert!(is_valid(&b), "{} should be valid", b);
        assert!(a.starts_with(UID_ROOT));
        assert_ne!(a, b);
    }

    #[test]
    fn implementation_uid_is_valid() {
        assert!(is_valid(IMPLEMENTATION_CLASS_UID));
        assert!(IMPLEMENTATION_VERSION_NAME.len() <= 16);
    }
}
