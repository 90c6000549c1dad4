//! Structural checks for the E-Payments Directory credentials.
//!
//! Only the shape of the values is checked: the org id must be nine ASCII digits and the
//! download code must be 36 characters split by hyphens into 8-4-4-4-12 segments. The
//! characters inside download code segments are not inspected.

use crate::constants::{DOWNLOAD_CODE_LEN, DOWNLOAD_CODE_SEGMENTS, ORG_ID_LEN};
use crate::errors::AppResult;
use std::fmt;
use tracing::warn;

const SEGMENT_POSITIONS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Reason a credential string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Organization ID must be all numeric digits.")]
    OrgIdNotNumeric,
    #[error("Organization ID must be 9 numeric digits, got {length}.")]
    OrgIdLength { length: usize },
    #[error("Download code must be 36 characters including 4 hyphens, got {length}.")]
    DownloadCodeLength { length: usize },
    #[error("Download code must have 5 sections separated by 4 hyphens, got {sections}.")]
    DownloadCodeSections { sections: usize },
    #[error("Download code must have {expected} characters in the {position} section, got {actual}.")]
    DownloadCodeSegment {
        position: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Checks that `org_id` is exactly nine ASCII digits.
pub fn check_org_id(org_id: &str) -> Result<(), CredentialError> {
    if org_id.is_empty() || !org_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(CredentialError::OrgIdNotNumeric);
    }
    if org_id.len() != ORG_ID_LEN {
        return Err(CredentialError::OrgIdLength {
            length: org_id.len(),
        });
    }
    Ok(())
}

/// Checks that `download_code` is 36 characters in five hyphen-separated segments of
/// 8, 4, 4, 4 and 12 characters.
pub fn check_download_code(download_code: &str) -> Result<(), CredentialError> {
    let length = download_code.chars().count();
    if length != DOWNLOAD_CODE_LEN {
        return Err(CredentialError::DownloadCodeLength { length });
    }

    let segments: Vec<&str> = download_code.split('-').collect();
    if segments.len() != DOWNLOAD_CODE_SEGMENTS.len() {
        return Err(CredentialError::DownloadCodeSections {
            sections: segments.len(),
        });
    }

    for ((segment, &expected), position) in segments
        .iter()
        .zip(DOWNLOAD_CODE_SEGMENTS.iter())
        .zip(SEGMENT_POSITIONS)
    {
        let actual = segment.chars().count();
        if actual != expected {
            return Err(CredentialError::DownloadCodeSegment {
                position,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Returns `true` when `org_id` is well formed, logging the reason otherwise.
pub fn validate_org_id(org_id: &str) -> bool {
    match check_org_id(org_id) {
        Ok(()) => true,
        Err(e) => {
            warn!(reason = %e, "Rejected organization ID");
            false
        }
    }
}

/// Returns `true` when `download_code` is well formed, logging the reason otherwise.
pub fn validate_download_code(download_code: &str) -> bool {
    match check_download_code(download_code) {
        Ok(()) => true,
        Err(e) => {
            warn!(reason = %e, "Rejected download code");
            false
        }
    }
}

/// A validated org id and download code pair.
///
/// The only way to obtain one is [`Credentials::new`], so holding a `Credentials` means both
/// values passed validation. Values are sent verbatim as request headers.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    org_id: String,
    download_code: String,
}

impl Credentials {
    /// Validates both strings and builds the pair.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` with the first failing rule. The org id is checked
    /// before the download code.
    pub fn new(org_id: impl Into<String>, download_code: impl Into<String>) -> AppResult<Self> {
        let org_id = org_id.into();
        let download_code = download_code.into();
        check_org_id(&org_id)?;
        check_download_code(&download_code)?;
        Ok(Self {
            org_id,
            download_code,
        })
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    pub fn download_code(&self) -> &str {
        &self.download_code
    }
}

// Keep the download code out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("org_id", &self.org_id)
            .field("download_code", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    const VALID_CODE: &str = "AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE";

    #[test]
    fn org_id_accepts_nine_digits() {
        assert!(validate_org_id("123456789"));
        assert!(validate_org_id("000000000"));
    }

    #[test]
    fn org_id_rejects_wrong_length() {
        assert!(!validate_org_id("12345678"));
        assert!(!validate_org_id("1234567890"));
        assert_eq!(
            check_org_id("12345678"),
            Err(CredentialError::OrgIdLength { length: 8 })
        );
    }

    #[test]
    fn org_id_rejects_non_digits() {
        assert!(!validate_org_id("12345678a"));
        assert!(!validate_org_id(""));
        assert!(!validate_org_id(" 12345678"));
        assert_eq!(check_org_id(""), Err(CredentialError::OrgIdNotNumeric));
    }

    #[test]
    fn org_id_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!validate_org_id("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn download_code_accepts_8_4_4_4_12() {
        assert!(validate_download_code(VALID_CODE));
        assert!(validate_download_code("1a2b3c4d-0000-ffff-9999-abcdefabcdef"));
    }

    #[test]
    fn download_code_rejects_short_code() {
        let code = "AAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE";
        assert_eq!(code.len(), 35);
        assert!(!validate_download_code(code));
        assert_eq!(
            check_download_code(code),
            Err(CredentialError::DownloadCodeLength { length: 35 })
        );
    }

    #[test]
    fn download_code_rejects_wrong_hyphen_count() {
        // 36 characters but only three hyphens
        let code = "AAAAAAAAA-BBBBB-CCCC-DDDDEEEEEEEEEEE";
        assert_eq!(code.len(), 36);
        assert_eq!(
            check_download_code(code),
            Err(CredentialError::DownloadCodeSections { sections: 4 })
        );

        // 36 characters with five hyphens
        let code = "AAAAAAAA-BBBB-CCCC-DDDD-EEEEE-EEEEEE";
        assert_eq!(code.len(), 36);
        assert_eq!(
            check_download_code(code),
            Err(CredentialError::DownloadCodeSections { sections: 6 })
        );
    }

    #[test]
    fn download_code_rejects_misplaced_segment_lengths() {
        let code = "AAAAAAAAA-BBB-CCCC-DDDD-EEEEEEEEEEEE";
        assert_eq!(code.len(), 36);
        assert_eq!(
            check_download_code(code),
            Err(CredentialError::DownloadCodeSegment {
                position: "first",
                expected: 8,
                actual: 9,
            })
        );

        let code = "AAAAAAAA-BBBB-CCCC-DDDDD-EEEEEEEEEEE";
        assert_eq!(
            check_download_code(code),
            Err(CredentialError::DownloadCodeSegment {
                position: "fourth",
                expected: 4,
                actual: 5,
            })
        );
    }

    #[test]
    fn download_code_segment_content_is_not_checked() {
        assert!(validate_download_code("!!!!!!!!-____-....-    -************"));
    }

    #[test]
    fn credentials_new_validates_both_fields() {
        let creds = Credentials::new("123456789", VALID_CODE).unwrap();
        assert_eq!(creds.org_id(), "123456789");
        assert_eq!(creds.download_code(), VALID_CODE);

        let err = Credentials::new("12345678a", VALID_CODE).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(CredentialError::OrgIdNotNumeric)
        ));

        let err = Credentials::new("123456789", "too-short").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(CredentialError::DownloadCodeLength { .. })
        ));
    }

    #[test]
    fn credentials_debug_hides_download_code() {
        let creds = Credentials::new("123456789", VALID_CODE).unwrap();
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("123456789"));
        assert!(!rendered.contains(VALID_CODE));
    }

    #[test]
    fn rejected_org_id_is_logged_with_reason() {
        let (valid, logs) = crate::test_logs::capture_warnings(|| validate_org_id("12345678a"));

        assert!(!valid);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Rejected organization ID"));
        assert!(logs.contains("Organization ID must be all numeric digits."));
    }

    #[test]
    fn rejected_download_code_is_logged_without_the_code() {
        let code = "AAAAAAAA-BBBB-CCCC-DDDD";
        let (valid, logs) = crate::test_logs::capture_warnings(|| validate_download_code(code));

        assert!(!valid);
        assert!(logs.contains("Rejected download code"));
        assert!(logs.contains("got 23."));
        assert!(!logs.contains(code));
    }

    #[test]
    fn accepted_credentials_log_nothing() {
        let (valid, logs) = crate::test_logs::capture_warnings(|| {
            validate_org_id("123456789")
                && validate_download_code("AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE")
        });

        assert!(valid);
        assert!(logs.is_empty());
    }
}
