//! In-process implementation of KeyValueStore
//!
//! Mirrors the Redis semantics the repository relies on: reading a missing
//! hash yields an empty map, and set operations are idempotent.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use crate::domain::{DomainError, KeyValueStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    hashes: RwLock<HashMap<String, HashMap<String, String>>>,
    sets: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, key: &str, fields: &[(&str, &str)]) -> Result<(), DomainError> {
        let mut hashes = self.hashes.write().await;
        let hash = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, DomainError> {
        let hashes = self.hashes.read().await;
        Ok(hashes.get(key).cloned().unwrap_or_default())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), DomainError> {
        let mut sets = self.sets.write().await;
        sets.entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), DomainError> {
        let mut sets = self.sets.write().await;
        if let Some(set) = sets.get_mut(key) {
            set.remove(member);
            if set.is_empty() {
                sets.remove(key);
            }
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, DomainError> {
        let sets = self.sets.read().await;
        Ok(sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        if self.hashes.read().await.contains_key(key) {
            return Ok(true);
        }
        Ok(self.sets.read().await.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.hashes.write().await.remove(key);
        self.sets.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_hash_reads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.hash_get_all("nope").await.unwrap().is_empty());
        assert!(!store.exists("nope").await.unwrap());
    }

    #[tokio::test]
    async fn hash_set_merges_fields() {
        let store = MemoryStore::new();
        store.hash_set("k", &[("a", "1"), ("b", "2")]).await.unwrap();
        store.hash_set("k", &[("b", "3")]).await.unwrap();

        let fields = store.hash_get_all("k").await.unwrap();
        assert_eq!(fields.get("a").map(String::as_str), Some("1"));
        assert_eq!(fields.get("b").map(String::as_str), Some("3"));
    }

    #[tokio::test]
    async fn set_membership_round_trip() {
        let store = MemoryStore::new();
        store.set_add("ids", "x").await.unwrap();
        store.set_add("ids", "x").await.unwrap();
        store.set_add("ids", "y").await.unwrap();
        assert_eq!(store.set_members("ids").await.unwrap(), vec!["x", "y"]);

        store.set_remove("ids", "x").await.unwrap();
        store.set_remove("ids", "y").await.unwrap();
        assert!(store.set_members("ids").await.unwrap().is_empty());
        assert!(!store.exists("ids").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_hash() {
        let store = MemoryStore::new();
        store.hash_set("k", &[("a", "1")]).await.unwrap();
        assert!(store.exists("k").await.unwrap());

        store.delete("k").await.unwrap();
        assert!(!store.exists("k").await.unwrap());
    }
}
