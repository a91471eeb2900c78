//! Field update: merge a fixed field map onto one known pricing document.
//! Fields not named in the map are left as stored; repeated runs are
//! idempotent.

use mongodb::bson::{doc, Document};

use crate::database::MongoDb;

const PRICING_COLLECTION: &str = "pricing";

pub const TARGET_ID: &str = "coach-session";

/// The fields being corrected on the target document.
pub fn field_updates() -> Document {
    doc! {
        "price": 1500,
        "time_window": "06:00-21:00",
        "notes": "Includes programme review",
    }
}

pub async fn run(db: &MongoDb) -> Result<(), String> {
    let created = merge_fields(db, PRICING_COLLECTION, TARGET_ID, field_updates()).await?;
    if created {
        println!("{}/{}: created with updated fields", PRICING_COLLECTION, TARGET_ID);
    } else {
        println!("{}/{}: fields updated", PRICING_COLLECTION, TARGET_ID);
    }
    Ok(())
}

/// Merge-write `fields` onto the document with the given id, creating it if
/// absent. Returns whether the document was created rather than matched.
pub async fn merge_fields(
    db: &MongoDb,
    collection_name: &str,
    id: &str,
    fields: Document,
) -> Result<bool, String> {
    let collection = db.collection::<Document>(collection_name);
    let result = collection
        .update_one(doc! { "_id": id }, doc! { "$set": fields })
        .upsert(true)
        .await
        .map_err(|e| format!("failed to update {}/{}: {}", collection_name, id, e))?;
    Ok(result.upserted_id.is_some())
}
