//! Common helpers shared across CLI commands

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
/// The target file already carries `[tool.commitizen]`; informational no-op
pub const EXIT_ALREADY_CONFIGURED: i32 = 10;
/// `.cz.toml` exists but holds no usable config; fatal
pub const EXIT_MISCONFIGURED: i32 = 11;
