//! Display-name derivation for discovered monuments
//!
//! Prefab paths like
//! `assets/bundled/prefabs/autospawn/monument/small/warehouse_1.prefab`
//! become human-readable table keys like `Warehouse0`. The numeric suffix is
//! always appended, starting at 0, so repeated instances of the same prefab
//! sort and display predictably.

/// Derive a display base name from a raw prefab path
///
/// Takes the last path segment minus its extension, turns underscores into
/// spaces, strips a trailing " 1" instance marker, and title-cases each word.
pub fn display_name(raw: &str) -> String {
    let segment = raw.rsplit('/').next().unwrap_or(raw);
    let stem = match segment.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => segment,
    };

    let spaced = stem.replace('_', " ");
    let trimmed = spaced.strip_suffix(" 1").unwrap_or(&spaced);

    title_case(trimmed)
}

/// Append the first unused numeric suffix, trying 0, 1, 2, ...
///
/// `is_taken` reports whether a candidate name is already present in the
/// registry; the returned name is guaranteed not taken.
pub fn dedup_name(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut i = 0u32;
    loop {
        let candidate = format!("{base}{i}");
        if !is_taken(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
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
