//! Field-match delete: remove every pricing document whose `Particulars`
//! equals one of the target names, falling back to the `name` field only
//! when the primary query matched nothing.

use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Collection;

use crate::database::MongoDb;
use crate::models::doc_id;

const PRICING_COLLECTION: &str = "pricing";

/// Catalogue entries scheduled for removal, by display name.
pub const TARGET_NAMES: [&str; 2] = ["Coach Session Only", "AM Coach Session"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Which field the equality query matched on, when anything matched.
    pub matched_field: Option<&'static str>,
    pub deleted: u64,
    pub failed: u64,
}

pub async fn run(db: &MongoDb) -> Result<(), String> {
    delete_targets(db, PRICING_COLLECTION, &TARGET_NAMES).await?;
    println!("Done.");
    Ok(())
}

/// Per-document delete failures are tolerated inside [`delete_matching`]; a
/// failed query means the store itself is gone, so it aborts the remaining
/// targets and the error propagates to the caller.
pub async fn delete_targets(
    db: &MongoDb,
    collection_name: &str,
    targets: &[&str],
) -> Result<(), String> {
    for target in targets {
        let outcome = delete_matching(db, collection_name, target).await?;
        match outcome.matched_field {
            Some(field) => println!(
                "{}: deleted {} document(s) matched on `{}` ({} failed)",
                target, outcome.deleted, field, outcome.failed
            ),
            None => println!("{}: no {} documents matched", target, collection_name),
        }
    }
    Ok(())
}

/// Exact-equality query on `Particulars`; the `name` query is only issued
/// when the first one matched nothing. Each delete is awaited in order, so
/// the returned counts reflect completed deletes, and a single failed delete
/// does not stop the rest.
pub async fn delete_matching(
    db: &MongoDb,
    collection_name: &str,
    target: &str,
) -> Result<MatchOutcome, String> {
    let collection = db.collection::<Document>(collection_name);

    let mut matched_field = Some("Particulars");
    let mut matches = find_all(&collection, doc! { "Particulars": target }).await?;
    if matches.is_empty() {
        matches = find_all(&collection, doc! { "name": target }).await?;
        matched_field = if matches.is_empty() { None } else { Some("name") };
    }

    let mut outcome = MatchOutcome {
        matched_field,
        ..MatchOutcome::default()
    };

    for document in &matches {
        let id = document.get("_id").cloned().unwrap_or(Bson::Null);
        match collection.delete_one(doc! { "_id": id }).await {
            Ok(result) => {
                outcome.deleted += result.deleted_count;
                println!("🗑️ deleted {}/{}", collection_name, doc_id(document));
            }
            Err(e) => {
                log::error!(
                    "❌ failed to delete {}/{}: {}",
                    collection_name,
                    doc_id(document),
                    e
                );
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

async fn find_all(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<Document>, String> {
    let cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("query failed: {}", e))?;
    cursor
        .try_collect()
        .await
        .map_err(|e| format!("cursor error: {}", e))
}
