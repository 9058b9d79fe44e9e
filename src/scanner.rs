use crate::classify::parser;
use crate::error::Error;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Non-recursive listing of the image files in `dir`. Names come back
/// sorted lexicographically so repeated runs see group members in the same
/// order, which pins down ties between equal order numbers.
pub fn list_image_files(dir: &Path) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_owned(),
            None => {
                warn!("Skipping non-UTF-8 filename: {}", path.display());
                continue;
            }
        };
        if parser::is_image_file(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(Error::NoImageFiles);
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_only_image_files_sorted() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("a.PNG"), b"x").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(tmp.path().join("sub.jpg")).unwrap();

        let names = list_image_files(tmp.path()).unwrap();
        assert_eq!(names, vec!["a.PNG".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn empty_folder_is_an_error() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        assert!(matches!(
            list_image_files(tmp.path()),
            Err(Error::NoImageFiles)
        ));
    }

    #[test]
    fn missing_folder_surfaces_io_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("missing");
        assert!(matches!(list_image_files(&gone), Err(Error::Io(_))));
    }
}
