/// Constants used throughout the passdex codebase
// Store layout
pub const DEFAULT_STORE_DIR_NAME: &str = ".password-store";
pub const DEFAULT_ENCRYPTED_SUFFIX: &str = "gpg";
pub const IDENTIFIER_SEPARATOR: char = '/';

// Secret-revealing collaborator
pub const DEFAULT_REVEAL_COMMAND: &str = "pass";

// Environment variable names
pub const PASSWORD_STORE_DIR_VAR: &str = "PASSWORD_STORE_DIR";
pub const PASSDEX_REVEAL_CMD_VAR: &str = "PASSDEX_REVEAL_CMD";
pub const PASSDEX_LOG_VAR: &str = "PASSDEX_LOG";

// Whole-string pattern used when a listing has no filter
pub const MATCH_ALL_PATTERN: &str = ".*";
