use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/**
    Reads the contents of a file to a string.
*/
pub fn read_string_from_file(path: impl AsRef<Path>) -> io::Result<String> {
    let mut file = File::open(path.as_ref())?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    log::debug!("read {} bytes from {}", contents.len(), path.as_ref().display());

    Ok(contents)
}

#[test]
fn test_missing_file_is_an_error() {
    let err = read_string_from_file("/definitely/not/here.txt").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
