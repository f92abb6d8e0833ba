/// Recipe id selected by a route fragment such as `#47746`.
///
/// Accepts the fragment with or without the leading `#`, or a whole URL.
pub fn recipe_id_from_fragment(fragment: &str) -> Option<&str> {
    let fragment = match fragment.rsplit_once('#') {
        Some((_, after)) => after,
        None => fragment,
    };
    let id = fragment.trim();
    (!id.is_empty()).then_some(id)
}

/// Fragment that selects `id`
pub fn fragment_for(id: &str) -> String {
    format!("#{}", id)
}
