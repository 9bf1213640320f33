//! Scratch markers spliced into text during tokenization

/// `base`, extended with `X` until no haystack contains it
///
/// Markers stay alphanumeric so the padding rules never split them.
pub(crate) fn unique_marker(base: &str, haystacks: &[&str]) -> String {
    let mut marker = base.to_string();
    while haystacks.iter().any(|text| text.contains(marker.as_str())) {
        marker.push('X');
    }
    marker
}
