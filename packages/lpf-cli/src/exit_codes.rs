pub const SUCCESS: i32 = 0;
/// Rejected arguments, unreadable input, or a design that failed validation
pub const INPUT_ERROR: i32 = 1;
/// Output could not be serialized or written
pub const EXECUTION_ERROR: i32 = 2;
/// Batch where some requests designed and others did not
pub const PARTIAL_FAILURE: i32 = 3;
