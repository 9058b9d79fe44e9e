use crate::model::ParsedKey;
use lazy_static::lazy_static;
use regex::Regex;

/// Extensions the batch accepts, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "gif"];

lazy_static! {
    // Anchored at the start of the stem; no flexibility around the literals.
    static ref SHOT_NAME: Regex =
        Regex::new(r"^(\d+)-Layer Shot_(\d+)-trigger_count").unwrap();
}

/// Extract the group/order pair from a filename. `None` is the normal
/// outcome for a name that does not follow the rule, not an error.
pub fn parse_filename(filename: &str) -> Option<ParsedKey> {
    let stem = match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    };
    let caps = SHOT_NAME.captures(stem)?;
    // Values beyond u64 are treated as a parse miss.
    let group = caps[1].parse().ok()?;
    let order = caps[2].parse().ok()?;
    Some(ParsedKey { group, order })
}

/// Extension including the leading dot, case preserved as given. A name
/// that is nothing but a dot-suffix (".jpg") has no extension.
pub fn raw_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => &filename[idx..],
        _ => "",
    }
}

pub fn is_image_file(filename: &str) -> bool {
    let ext = raw_extension(filename);
    if ext.len() < 2 {
        return false;
    }
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext[1..].eq_ignore_ascii_case(known))
}

/// Inverse of [`parse_filename`] for a well-formed name.
pub fn render_filename(group: u64, order: u64, ext: &str) -> String {
    format!("{}-Layer Shot_{}-trigger_count.{}", group, order, ext)
}
