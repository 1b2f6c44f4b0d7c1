use anyhow::{anyhow, Context, Result};
use std::io::{Cursor, Read};
use std::{fs, path::Path};
use zip::ZipArchive;

/// Read a `.fnt` file, or the first `.fnt` entry when `path` is a ZIP archive.
pub fn read_font_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
        return read_from_zip(&bytes).with_context(|| format!("reading archive {}", path.display()));
    }
    Ok(bytes)
}

fn read_from_zip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.name().to_ascii_lowercase().ends_with(".fnt") {
            log::debug!("using archive entry {}", file.name());
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            return Ok(buf);
        }
    }
    Err(anyhow!("zip archive contained no .fnt"))
}
