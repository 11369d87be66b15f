// crates/easepark-core/src/traits.rs
use crate::lang::Language;
use crate::text::{contains_ignore_case, normalize_key};

/// Anything with a per-language display label.
///
/// Implementors provide [`Localize::localized`] and get the comparison
/// helpers for free:
/// - [`Localize::is_named`]: equality on the normalized key, across all
///   three languages
/// - [`Localize::label_contains`]: case-insensitive substring on the label
///   in one language
///
/// # Examples
/// ```rust
/// use easepark_core::{DistrictKey, Language, Localize};
///
/// let d = DistrictKey::WanChai;
/// assert_eq!(d.localized(Language::Tc), "灣仔區");
/// assert!(d.is_named("wan-chai"));
/// assert!(d.label_contains("chai", Language::En));
/// ```
pub trait Localize {
    /// The label shown for `lang`.
    fn localized(&self, lang: Language) -> &str;

    /// `true` if `q` equals the label in any language once both are
    /// normalized with [`normalize_key`].
    fn is_named(&self, q: &str) -> bool {
        let q = normalize_key(q);
        !q.is_empty()
            && Language::ALL
                .iter()
                .any(|&lang| normalize_key(self.localized(lang)) == q)
    }

    /// Case-insensitive substring match on the label in `lang`.
    #[inline]
    fn label_contains(&self, q: &str, lang: Language) -> bool {
        contains_ignore_case(self.localized(lang), q)
    }
}
