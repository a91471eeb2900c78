use mongodb::bson::Document;

/// Ordered name-field candidates for pricing documents. Historical writers
/// disagreed on the key (`Particulars` vs `name`), so lookups walk this list
/// and take the first field that is present.
pub const NAME_FIELDS: [&str; 3] = ["Particulars", "particulars", "name"];

/// Display name of a pricing document: the trimmed value of the first
/// candidate field present, if any.
pub fn display_name(document: &Document) -> Option<&str> {
    for field in NAME_FIELDS {
        if let Ok(value) = document.get_str(field) {
            return Some(value.trim());
        }
    }
    None
}

/// Whether a pricing document's display name equals `target` after trimming
/// both sides.
pub fn name_matches(document: &Document, target: &str) -> bool {
    display_name(document) == Some(target.trim())
}
