//! Display-name derivation for media entries without an explicit name.

/// Derive a display name from a storage path.
///
/// Strips the directory and the last extension, then keeps the prefix
/// before the first `-`. Uploads are stored as `<name>-<suffix>.<ext>`, so
/// `uploads/overlay-8f2a.png` becomes `overlay`.
///
/// Falls back to the whole stem when the prefix is empty (`-x.png`), and
/// returns an empty string only when the path has no file name at all.
///
/// # Examples
///
/// ```
/// use promptref::catalog::derive_display_name;
///
/// assert_eq!(derive_display_name("uploads/overlay-8f2a.png"), "overlay");
/// assert_eq!(derive_display_name("C:\\media\\logo.svg"), "logo");
/// ```
pub fn derive_display_name(storage_path: &str) -> String {
    let file_name = storage_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(storage_path);

    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    match stem.split('-').next() {
        Some(prefix) if !prefix.is_empty() => prefix.to_string(),
        _ => stem.to_string(),
    }
}
