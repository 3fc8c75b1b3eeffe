//! File names for numbered diagnostic dumps.

/// Left-pad the decimal form of `v` with `'0'` up to `min_len` characters.
///
/// The sign is part of the decimal form, so `pad(-5, 3)` is `"0-5"`.
pub fn pad(v: i64, min_len: usize) -> String {
    let s = v.to_string();
    if s.len() >= min_len {
        return s;
    }
    let mut out = "0".repeat(min_len - s.len());
    out.push_str(&s);
    out
}

/// `"{prefix}_{index padded}.{ext}"`, e.g. `side_007.png`.
pub fn numbered_file_name(prefix: &str, index: usize, min_len: usize, ext: &str) -> String {
    format!("{prefix}_{}.{ext}", pad(index as i64, min_len))
}
