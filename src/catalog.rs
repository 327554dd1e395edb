use std::path::Path;

use carousel::Slide;
use exif::Exif;

use crate::texture_loader::exif_description;

/// Describes an image file as a slide: title from the file name, description
/// from the EXIF `ImageDescription` tag when there is one.
pub fn describe(path: &Path, exif: Option<&Exif>) -> Slide {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let description = exif.and_then(exif_description).unwrap_or_default();

    let title = title_from_stem(stem);
    Slide::new(path.display().to_string(), title, description)
}

/// "mountain_majesty" -> "Mountain Majesty", "slide-1" -> "Slide 1".
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
