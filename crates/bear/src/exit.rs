//! Process exit codes, following the BSD `sysexits.h` convention.

/// Successful run.
pub const EX_OK: i32 = 0;
/// The command was used incorrectly.
pub const EX_USAGE: i32 = 64;
/// The script had lexical errors.
pub const EX_DATAERR: i32 = 65;
/// The script could not be opened.
pub const EX_NOINPUT: i32 = 66;
/// Reading input failed.
pub const EX_IOERR: i32 = 74;

/// Exit code for a completed scan of a file or `-e` source.
///
/// Any diagnostic fails the run, but only after the whole source has been
/// scanned and its tokens printed.
pub fn for_scan(had_error: bool) -> i32 {
    if had_error { EX_DATAERR } else { EX_OK }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_scan() {
        assert_eq!(for_scan(false), EX_OK);
        assert_eq!(for_scan(true), EX_DATAERR);
    }
}
