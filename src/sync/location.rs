//! Location helpers: page identifiers and origins from full hrefs.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use url::Url;

/// Last path segment of `href`, ignoring query and fragment.
///
/// Works for absolute URLs and bare paths alike (`/app/stats.html?x=1` →
/// `stats.html`). The site root yields an empty string.
#[must_use]
pub fn page_id(href: &str) -> &str {
    let without_fragment = href.split('#').next().unwrap_or_default();
    let path = without_fragment.split('?').next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default()
}

/// `scheme://host[:port]` of an absolute `href`, or `None` for relative ones.
#[must_use]
pub fn origin(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Absolute URL of `page` on the site serving `href`; falls back to `/page`.
#[must_use]
pub fn page_url(href: &str, page: &str) -> String {
    match origin(href) {
        Some(origin) => format!("{origin}/{page}"),
        None => format!("/{page}"),
    }
}
