use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{Exif, In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn has_exif_container(path: &Path) -> bool {
    matches!(extension_of(path).as_str(), "jpg" | "jpeg")
}

/// Image files of `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

/// An image file read into memory, with its EXIF block parsed once.
pub struct ImageFile<'a> {
    pub path: &'a Path,
    pub bytes: Vec<u8>,
    pub exif: Option<Exif>,
}

pub fn read_image(image_path: &Path) -> Result<ImageFile<'_>> {
    let bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;
    let exif = parse_exif(image_path, &bytes);
    Ok(ImageFile {
        path: image_path,
        bytes,
        exif,
    })
}

/// EXIF block of a JPEG, if it has a readable one.
pub fn parse_exif(image_path: &Path, bytes: &[u8]) -> Option<Exif> {
    if !has_exif_container(image_path) {
        return None;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => Some(exif),
        Err(e) => {
            // Not fatal: the image is shown as stored
            warn!(path = %image_path.display(), "could not read EXIF data: {e}");
            None
        }
    }
}

/// Free-text `ImageDescription` tag, trimmed of padding.
pub fn exif_description(exif: &Exif) -> Option<String> {
    let field = exif.get_field(Tag::ImageDescription, In::PRIMARY)?;
    let Value::Ascii(values) = &field.value else {
        return None;
    };
    let text = String::from_utf8_lossy(values.first()?);
    let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    (!text.is_empty()).then(|| text.to_string())
}

fn exif_orientation(exif: &Exif) -> u16 {
    let field = exif.get_field(Tag::Orientation, In::PRIMARY);
    match field.map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Decodes an image, applies its EXIF orientation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_file: &ImageFile<'_>,
) -> Result<Texture2D> {
    let path = image_file.path;
    let orientation = image_file.exif.as_ref().map_or(1, exif_orientation);

    let extension = extension_of(path);
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &image_file.bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", path.display()))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are shown unflipped.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = %path.display(), orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", path.display()))
}
