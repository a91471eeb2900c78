//! Point lookup & conditional delete: retire pricing documents with known
//! ids. Absent ids are reported, not errors; per-item failures are logged
//! and the loop keeps going.

use mongodb::bson::{doc, Document};

use crate::database::MongoDb;

const PRICING_COLLECTION: &str = "pricing";

/// Pricing documents retired from the catalogue, by known id.
pub const CANDIDATE_IDS: [&str; 3] = [
    "coach-session-only",
    "am-coach-session",
    "pm-coach-session",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: u64,
    pub missing: u64,
    pub failed: u64,
}

pub async fn run(db: &MongoDb) -> Result<(), String> {
    let outcome = delete_candidates(db, PRICING_COLLECTION, &CANDIDATE_IDS).await;
    println!(
        "Done: {} deleted, {} not found, {} failed.",
        outcome.deleted, outcome.missing, outcome.failed
    );
    Ok(())
}

/// Best effort over the candidate list: fetch each id, delete it if present,
/// report absence otherwise. Never aborts on a per-item failure.
pub async fn delete_candidates(
    db: &MongoDb,
    collection_name: &str,
    ids: &[&str],
) -> DeleteOutcome {
    let collection = db.collection::<Document>(collection_name);
    let mut outcome = DeleteOutcome::default();

    for id in ids {
        match collection.find_one(doc! { "_id": *id }).await {
            Ok(Some(_)) => match collection.delete_one(doc! { "_id": *id }).await {
                Ok(result) if result.deleted_count > 0 => {
                    println!("🗑️ deleted {}/{}", collection_name, id);
                    outcome.deleted += result.deleted_count;
                }
                Ok(_) => {
                    // Vanished between lookup and delete.
                    println!("{}/{}: not found", collection_name, id);
                    outcome.missing += 1;
                }
                Err(e) => {
                    log::error!("❌ failed to delete {}/{}: {}", collection_name, id, e);
                    outcome.failed += 1;
                }
            },
            Ok(None) => {
                println!("{}/{}: not found", collection_name, id);
                outcome.missing += 1;
            }
            Err(e) => {
                log::error!("❌ lookup failed for {}/{}: {}", collection_name, id, e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StoreCredentials;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn deletes_present_ids_and_reports_absent_ones() {
        dotenv::dotenv().ok();
        let db = MongoDb::connect(&StoreCredentials::ambient()).await.unwrap();

        let scratch = db.collection::<Document>("pricing_scratch");
        scratch.drop().await.unwrap();
        scratch
            .insert_many(vec![
                doc! { "_id": "coach-session-only", "price": 500 },
                doc! { "_id": "pm-coach-session", "price": 450 },
            ])
            .await
            .unwrap();

        let outcome = delete_candidates(&db, "pricing_scratch", &CANDIDATE_IDS).await;
        assert_eq!(
            outcome,
            DeleteOutcome { deleted: 2, missing: 1, failed: 0 }
        );
        assert_eq!(scratch.count_documents(doc! {}).await.unwrap(), 0);
    }
}
