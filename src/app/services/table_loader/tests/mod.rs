//! Test utilities for table loader testing

use std::io::Write;
use tempfile::NamedTempFile;


/// Small table in the student-data layout: two header lines, one commented
/// row, one missing weight
pub const SAMPLE_TABLE: &str = "Survey of four students, May 2014\n\
id     sex   dob      height  weight\n\
AB-1   M     1/1/96   1.80    80.0\n\
AB-2   F     2/2/96   1.60    -\n\
# AB-3 M     3/3/96   1.75    70.0\n\
AB-4   F     4/4/96   1.65    60.0\n";

/// Header lines before the data region in [`SAMPLE_TABLE`]
pub const SAMPLE_SKIP_ROWS: usize = 2;

pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
