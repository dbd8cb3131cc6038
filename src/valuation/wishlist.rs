use std::collections::BTreeSet;

/// Add `id` if absent, remove it if present. Returns the new set.
pub fn toggle(wishlist: &BTreeSet<String>, id: &str) -> BTreeSet<String> {
    let mut next = wishlist.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}
