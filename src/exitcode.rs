//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// A command handler failed
pub const FAILURE: i32 = 1;

/// Command line usage error (unknown flag, missing option, invalid value)
pub const USAGE: i32 = 2;

/// Internal software error (inconsistent command table)
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
