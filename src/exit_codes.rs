//! Exit code constants for the archprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: A required template parameter was not supplied
//! - 3: The template itself is malformed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input files, or invalid config.
pub const USER_ERROR: i32 = 1;

/// A placeholder had no value at render time.
pub const MISSING_PARAMETER: i32 = 2;

/// The template failed to parse.
pub const TEMPLATE_SYNTAX: i32 = 3;
