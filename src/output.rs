use crate::error::{MapError, Result};
use image::{ImageOutputFormat, RgbImage};
use log::debug;
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Write `img` to `path` as an 8-bit RGB PNG.
///
/// The image is encoded in memory and written to a sibling `.tmp` file which
/// is then renamed over the target, so a failed save never leaves a partial
/// PNG at `path`.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let mut encoded = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Png)?;
    debug!("Encoded {} bytes of PNG", encoded.len());

    let tmp = temp_path(path)?;
    if let Err(source) = fs::write(&tmp, &encoded) {
        let _ = fs::remove_file(&tmp);
        return Err(MapError::Io { path: tmp, source });
    }
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(MapError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| MapError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        })?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
