// Data source URL
pub const DEFAULT_BASE_URL: &str = "https://frbservices.org/EPaymentsDirectory/directories";

// Credential headers, sent verbatim
pub const ORG_ID_HEADER: &str = "X_FRB_EPAYMENTS_DIRECTORY_ORG_ID";
pub const DOWNLOAD_CODE_HEADER: &str = "X_FRB_EPAYMENTS_DIRECTORY_DOWNLOAD_CD";

// Credential shapes
pub const ORG_ID_LEN: usize = 9;
pub const DOWNLOAD_CODE_LEN: usize = 36;
pub const DOWNLOAD_CODE_SEGMENTS: [usize; 5] = [8, 4, 4, 4, 12];

// Output naming
pub const OUTPUT_FILE_SUFFIX: &str = "_routing_numbers";

// Printed once both directories have been attempted
pub const COMPLETION_MARKER: &str = "Last Done.";
