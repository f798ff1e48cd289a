use phonehub_catalog::{Catalog, Item};

/// True when `text` should be treated as "no search performed".
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Items whose name contains `text`, ignoring case, in catalog order.
///
/// The empty string matches every item; callers that treat a blank box as
/// "no search" should check [`is_blank`] first.
pub fn search<'a>(catalog: &'a Catalog, text: &str) -> Vec<&'a Item> {
    let needle = text.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.name_contains(&needle))
        .collect()
}
