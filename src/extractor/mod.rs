//! Image URL extraction from record content.
//!
//! Record bodies are HTML fragments of uneven quality; parsing is lenient
//! and never fails. Extraction preserves document order and duplicates so
//! the rewriter sees references exactly as they appear.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img[src]").expect("BUG: hardcoded CSS selector 'img[src]' is invalid")
});

/// Extract the externally-hosted image URLs from an HTML fragment.
///
/// Returns `src` values of `<img>` elements in document order, skipping:
/// - empty `src` attributes,
/// - root-relative paths (`/...`), which are already local,
/// - URLs starting with any of `trusted_prefixes` (plain string-prefix
///   match, not host-aware parsing).
#[must_use]
pub fn extract_image_urls(html: &str, trusted_prefixes: &[String]) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .filter(|src| !src.starts_with('/'))
        .filter(|src| {
            !trusted_prefixes
                .iter()
                .any(|prefix| src.starts_with(prefix.as_str()))
        })
        .map(str::to_string)
        .collect()
}
