use crate::error::Error;
use std::fs::File;
use std::io::{self, Cursor};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip the contents of `dir` into memory, relative paths preserved.
/// Entries are visited in sorted order so the archive layout is stable
/// across runs.
pub fn zip_dir(dir: &Path) -> Result<Vec<u8>, Error> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = match entry.path().strip_prefix(dir) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let name = rel.to_string_lossy().replace('\\', "/");
        writer.start_file(name, options)?;
        let mut file = File::open(entry.path())?;
        io::copy(&mut file, &mut writer)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
