//! In-memory store used as a test double for the hosted service.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Filter, Store, StoreError};

/// Mutex-guarded tables keyed by table name.
///
/// Update applies a shallow field merge to every matching row, and an
/// unmatched filter succeeds without touching anything, so handler tests
/// observe the same passthrough behavior the hosted store exhibits.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a table for a test scenario.
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .lock()
            .expect("memory store poisoned")
            .insert(table.to_string(), rows);
    }

    /// Snapshot a table's rows for assertions.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .expect("memory store poisoned")
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    match row.get(&filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(Value::Number(n)) => n.to_string() == filter.value,
        _ => false,
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self.rows(table))
    }

    async fn insert(&self, table: &str, record: Value) -> Result<(), StoreError> {
        self.tables
            .lock()
            .expect("memory store poisoned")
            .entry(table.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn update(&self, table: &str, record: Value, filter: Filter) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("memory store poisoned");
        let Some(rows) = tables.get_mut(table) else {
            return Ok(());
        };
        for row in rows.iter_mut().filter(|row| matches(row, &filter)) {
            if let (Some(target), Some(patch)) = (row.as_object_mut(), record.as_object()) {
                for (key, value) in patch {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_then_select_round_trips() {
        let store = MemoryStore::new();
        store
            .insert("videos", json!({"id": "v1", "title": "Intro"}))
            .await
            .unwrap();

        let rows = store.select_all("videos").await.unwrap();
        assert_eq!(rows, vec![json!({"id": "v1", "title": "Intro"})]);
    }

    #[tokio::test]
    async fn select_of_missing_table_is_empty() {
        let store = MemoryStore::new();
        assert!(store.select_all("videos").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_fields_into_matching_rows() {
        let store = MemoryStore::new();
        store.seed(
            "improvement_suggestions",
            vec![
                json!({"id": 1, "status": "pending"}),
                json!({"id": 2, "status": "pending"}),
            ],
        );

        store
            .update(
                "improvement_suggestions",
                json!({"status": "approved"}),
                Filter::eq("id", 2),
            )
            .await
            .unwrap();

        let rows = store.rows("improvement_suggestions");
        assert_eq!(rows[0]["status"], "pending");
        assert_eq!(rows[1]["status"], "approved");
    }

    #[tokio::test]
    async fn update_with_unmatched_filter_is_a_noop_success() {
        let store = MemoryStore::new();
        store.seed("videos", vec![json!({"id": "v1", "title": "Intro"})]);

        store
            .update("videos", json!({"title": "Other"}), Filter::eq("id", "missing"))
            .await
            .unwrap();

        assert_eq!(store.rows("videos"), vec![json!({"id": "v1", "title": "Intro"})]);
    }
}
