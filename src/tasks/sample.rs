//! Read-only sampling: print the first few documents of each collection so
//! an operator can eyeball what is actually stored.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};

use crate::database::MongoDb;
use crate::models::doc_id;

pub const SAMPLE_COLLECTIONS: [&str; 5] =
    ["members", "pricing", "payments", "gymEntries", "progress"];
pub const SAMPLE_LIMIT: i64 = 5;
pub const PREVIEW_LEN: usize = 200;

pub async fn run(db: &MongoDb) -> Result<(), String> {
    for name in SAMPLE_COLLECTIONS {
        println!("== {} ==", name);
        let count = sample_collection(db, name, SAMPLE_LIMIT).await?;
        println!("  ({} of up to {} shown)", count, SAMPLE_LIMIT);
    }
    Ok(())
}

/// Print up to `limit` documents from one collection; returns how many were
/// printed. First page only, never mutates.
pub async fn sample_collection(
    db: &MongoDb,
    collection_name: &str,
    limit: i64,
) -> Result<usize, String> {
    let collection = db.collection::<Document>(collection_name);
    let mut cursor = collection
        .find(doc! {})
        .limit(limit)
        .await
        .map_err(|e| format!("failed to query {}: {}", collection_name, e))?;

    let mut count = 0usize;
    while let Some(document) = cursor
        .try_next()
        .await
        .map_err(|e| format!("cursor error on {}: {}", collection_name, e))?
    {
        println!("  {}  {}", doc_id(&document), preview(&document));
        count += 1;
    }
    Ok(count)
}

fn preview(document: &Document) -> String {
    let json = serde_json::to_string(document).unwrap_or_else(|_| document.to_string());
    truncate(&json, PREVIEW_LEN)
}

/// Cap a string at `max` characters (not bytes, so multi-byte text stays
/// valid).
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StoreCredentials;
    use mongodb::bson::doc;

    #[test]
    fn short_strings_pass_through_untruncated() {
        assert_eq!(truncate("abc", 200), "abc");
    }

    #[test]
    fn long_strings_are_capped_at_max_chars() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long, PREVIEW_LEN).chars().count(), PREVIEW_LEN);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let s = "é".repeat(10);
        assert_eq!(truncate(&s, 4), "éééé");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn sampling_returns_collection_size_when_smaller_than_limit() {
        dotenv::dotenv().ok();
        let db = MongoDb::connect(&StoreCredentials::ambient()).await.unwrap();

        let scratch = db.collection::<Document>("sample_scratch");
        scratch.drop().await.unwrap();
        scratch
            .insert_many(vec![
                doc! { "_id": "a", "n": 1 },
                doc! { "_id": "b", "n": 2 },
                doc! { "_id": "c", "n": 3 },
            ])
            .await
            .unwrap();

        let count = sample_collection(&db, "sample_scratch", SAMPLE_LIMIT)
            .await
            .unwrap();
        assert_eq!(count, 3);
    }
}
