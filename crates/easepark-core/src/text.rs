// crates/easepark-core/src/text.rs

//! # Text helpers
//!
//! Everything that turns loosely formatted route text into comparable keys
//! lives here, so the resolver and the ranker agree on what "the same name"
//! means.

use std::borrow::Cow;

/// Separator used inside normalized keys (`hong_kong_island`).
pub const KEY_SEPARATOR: char = '_';

/// Decode a percent-encoded route segment.
///
/// Invalid escapes or non UTF-8 results leave the input untouched. The HTML
/// entity `&amp;` is also folded to `&`, because some legacy links were
/// copied out of rendered pages.
pub fn url_decode(raw: &str) -> String {
    let decoded = match urlencoding::decode(raw) {
        Ok(s) => s,
        Err(_) => Cow::Borrowed(raw),
    };
    replace_ignore_ascii_case(&decoded, "&amp;", "&")
}

fn replace_ignore_ascii_case(s: &str, needle: &str, with: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (idx, _) in lower.match_indices(needle) {
        out.push_str(&s[last..idx]);
        out.push_str(with);
        last = idx + needle.len();
    }
    out.push_str(&s[last..]);
    out
}

#[inline]
fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// CJK ideographs and the punctuation-free blocks the registry uses.
#[inline]
pub fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{4E00}'..='\u{9FFF}' // Unified Ideographs
        | '\u{F900}'..='\u{FAFF}' // Compatibility Ideographs
        | '\u{20000}'..='\u{2FA1F}' // Extensions B..F + supplement
    )
}

/// Normalize a route parameter or alias into a lookup key.
///
/// 1. URL-decode (see [`url_decode`]).
/// 2. Collapse runs of `-`, `_` and whitespace into one [`KEY_SEPARATOR`].
/// 3. Lower-case ASCII letters; CJK is left as-is.
/// 4. Drop anything that is not `a-z`, the separator or CJK. Dropped
///    characters neither start nor end a separator run, so
///    `"Central & Western"` becomes `central_western`.
///
/// # Examples
///
/// ```rust
/// use easepark_core::text::normalize_key;
///
/// assert_eq!(normalize_key("Hong Kong Island"), "hong_kong_island");
/// assert_eq!(normalize_key("hong-kong__island"), "hong_kong_island");
/// assert_eq!(normalize_key("Central%20%26%20Western"), "central_western");
/// assert_eq!(normalize_key("中西區"), "中西區");
/// ```
pub fn normalize_key(raw: &str) -> String {
    let decoded = url_decode(raw);
    let mut out = String::with_capacity(decoded.len());
    let mut pending_sep = false;

    for ch in decoded.chars() {
        if is_separator(ch) {
            pending_sep = true;
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || is_cjk(ch) {
            if pending_sep && !out.is_empty() {
                out.push(KEY_SEPARATOR);
            }
            pending_sep = false;
            out.push(ch);
        }
    }
    out
}

/// Upper-case the first letter of every space-separated word and lower-case
/// the rest. Words without cased letters (Chinese) pass through.
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
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

/// Human-readable form of an unmatched route parameter: decoded, separators
/// turned into single spaces, trimmed and title cased.
///
/// ```rust
/// use easepark_core::text::passthrough_label;
///
/// assert_eq!(passthrough_label("unknown-place_x"), "Unknown Place X");
/// assert_eq!(passthrough_label("%20tin%20shui%20wai "), "Tin Shui Wai");
/// ```
pub fn passthrough_label(raw: &str) -> String {
    let decoded = url_decode(raw);
    let spaced = decoded
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    title_case(&spaced)
}

/// Convert a label into a folded key suitable for collation.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (Chinese becomes its romanization,
///     `中西區` -> `Zhong Xi Qu`)
/// 2\) Normalize to lowercase
///
/// The result is only meant for ordering; equality checks on districts go
/// through [`normalize_key`].
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test used by the car-park search box.
///
/// An empty (or blank) needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_collapse_to_one() {
        assert_eq!(normalize_key("  Sham--Shui   Po__"), "sham_shui_po");
        assert_eq!(normalize_key("KOWLOON_CITY"), "kowloon_city");
    }

    #[test]
    fn ampersand_forms_agree() {
        let expected = "central_western";
        assert_eq!(normalize_key("Central & Western"), expected);
        assert_eq!(normalize_key("Central &amp; Western"), expected);
        assert_eq!(normalize_key("Central%26Western"), "centralwestern");
        assert_eq!(normalize_key("Central-Western"), expected);
    }

    #[test]
    fn digits_and_punctuation_are_dropped() {
        assert_eq!(normalize_key("Tai Po (2)"), "tai_po");
        assert_eq!(normalize_key("!!!"), "");
    }

    #[test]
    fn bad_escape_is_kept_verbatim() {
        assert_eq!(url_decode("100%zz"), "100%zz");
        assert_eq!(normalize_key("%E4%B8%AD%E8%A5%BF%E5%8D%80"), "中西區");
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("tSIM sha TSUI"), "Tsim Sha Tsui");
        assert_eq!(title_case("天水圍"), "天水圍");
    }

    #[test]
    fn fold_key_romanizes_chinese() {
        assert!(fold_key("中西區").starts_with("zhong"));
        assert_eq!(fold_key("Wan Chai"), "wan chai");
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(contains_ignore_case("Central Harbourfront", "CENTRAL"));
        assert!(contains_ignore_case("anything", "  "));
        assert!(!contains_ignore_case("Wan Chai", "central"));
    }
}
