//! Rename by value: scan the whole pricing collection, match display names
//! client-side (trimmed, candidate fields in priority order), and rewrite
//! both `Particulars` and `name` on every match.

use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};

use crate::database::MongoDb;
use crate::models::{doc_id, name_matches};

const PRICING_COLLECTION: &str = "pricing";

pub const OLD_NAME: &str = "Coach Session Only";
pub const NEW_NAME: &str = "Coach Session";

pub async fn run(db: &MongoDb) -> Result<(), String> {
    let renamed = rename_matching(db, PRICING_COLLECTION, OLD_NAME, NEW_NAME).await?;
    if renamed == 0 {
        println!("no pricing documents named {:?}", OLD_NAME);
    } else {
        println!("renamed {} document(s) to {:?}", renamed, NEW_NAME);
    }
    Ok(())
}

/// Full collection scan; matching is client-side so whitespace-padded and
/// drifted-field documents are caught too. Updates run one at a time, each
/// awaited before the next, and set both name fields to the new literal.
pub async fn rename_matching(
    db: &MongoDb,
    collection_name: &str,
    target: &str,
    new_name: &str,
) -> Result<u64, String> {
    let collection = db.collection::<Document>(collection_name);

    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("failed to scan {}: {}", collection_name, e))?;
    let documents: Vec<Document> = cursor
        .try_collect()
        .await
        .map_err(|e| format!("cursor error on {}: {}", collection_name, e))?;

    let mut renamed = 0u64;
    for document in documents.iter().filter(|d| name_matches(d, target)) {
        let id = document.get("_id").cloned().unwrap_or(Bson::Null);
        let update = doc! { "$set": { "Particulars": new_name, "name": new_name } };
        match collection.update_one(doc! { "_id": id }, update).await {
            Ok(result) => {
                renamed += result.modified_count;
                println!(
                    "renamed {}/{} -> {:?}",
                    collection_name,
                    doc_id(document),
                    new_name
                );
            }
            Err(e) => log::error!(
                "❌ failed to rename {}/{}: {}",
                collection_name,
                doc_id(document),
                e
            ),
        }
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StoreCredentials;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn exact_and_padded_names_are_both_renamed() {
        dotenv::dotenv().ok();
        let db = MongoDb::connect(&StoreCredentials::ambient()).await.unwrap();

        let scratch = db.collection::<Document>("pricing_rename_scratch");
        scratch.drop().await.unwrap();
        scratch
            .insert_many(vec![
                doc! { "_id": "p1", "Particulars": "Coach Session Only" },
                doc! { "_id": "p2", "Particulars": " Coach Session Only " },
                doc! { "_id": "p3", "name": "Day Pass" },
            ])
            .await
            .unwrap();

        let renamed = rename_matching(&db, "pricing_rename_scratch", OLD_NAME, NEW_NAME)
            .await
            .unwrap();
        assert_eq!(renamed, 2);

        for id in ["p1", "p2"] {
            let stored = scratch.find_one(doc! { "_id": id }).await.unwrap().unwrap();
            assert_eq!(stored.get_str("Particulars").unwrap(), NEW_NAME);
            assert_eq!(stored.get_str("name").unwrap(), NEW_NAME);
        }
        let untouched = scratch.find_one(doc! { "_id": "p3" }).await.unwrap().unwrap();
        assert_eq!(untouched.get_str("name").unwrap(), "Day Pass");
    }
}
