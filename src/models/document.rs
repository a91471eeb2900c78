use mongodb::bson::{Bson, Document};

/// Printable id of a raw document. Pricing ids are plain strings; older
/// collections carry ObjectIds.
pub fn doc_id(document: &Document) -> String {
    match document.get("_id") {
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => "<no id>".to_string(),
    }
}
