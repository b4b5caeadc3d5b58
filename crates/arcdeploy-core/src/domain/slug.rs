//! Gateway slug derivation.
//!
//! Slugs are the URL path segment identifying a deployed gateway. They are
//! derived from the toolkit name, with an optional operator-supplied prefix
//! for namespacing shared projects.

/// Derive the base slug for a toolkit name.
///
/// Lowercases the name and replaces spaces and underscores with hyphens.
/// No other normalization is applied; the upstream service validates the
/// final slug.
#[must_use]
pub fn toolkit_slug(name: &str) -> String {
    name.to_lowercase().replace([' ', '_'], "-")
}

/// Derive the full gateway slug for a toolkit, applying the optional prefix.
///
/// The prefix is joined with a hyphen and used verbatim; an empty prefix is
/// treated as absent.
#[must_use]
pub fn gateway_slug(name: &str, prefix: Option<&str>) -> String {
    let slug = toolkit_slug(name);
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}-{slug}"),
        _ => slug,
    }
}
