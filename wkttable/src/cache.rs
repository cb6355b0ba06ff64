//! Cache de sérialisation adressé par contenu
//!
//! La clé est un hash blake3 du contenu de la table (pas de l'identité de
//! l'objet): deux tables égales champ à champ partagent la même entrée.
//! Le cache peut être vidé à tout moment, la sérialisation étant une
//! fonction pure de son entrée.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use blake3::Hasher;

use crate::serialize;
use crate::types::Table;
use crate::WktTableError;

/// Calcule un hash stable du contenu d'une table
///
/// Les champs sont préfixés par leur longueur pour que deux découpages
/// différents des mêmes bytes ne produisent pas le même hash.
pub fn table_digest(table: &Table) -> [u8; 32] {
    let mut hasher = Hasher::new();

    hasher.update(b"HEADERS");
    for header in &table.headers {
        hash_field(&mut hasher, header);
    }

    hasher.update(b"ROWS");
    for row in &table.rows {
        hasher.update(b"ROW");
        for field in row {
            hash_field(&mut hasher, field);
        }
    }

    *hasher.finalize().as_bytes()
}

fn hash_field(hasher: &mut Hasher, field: &str) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

/// Cache des sérialisations CSV, clé = hash de contenu
#[derive(Debug, Default)]
pub struct CsvCache {
    entries: HashMap<[u8; 32], Vec<u8>>,
    hits: u64,
    misses: u64,
}

impl CsvCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retourne les bytes CSV de la table, en sérialisant au premier appel
    ///
    /// Les appels suivants avec un contenu identique retournent les bytes
    /// en cache sans recalcul.
    pub fn get_or_serialize(&mut self, table: &Table) -> Result<&[u8], WktTableError> {
        let digest = table_digest(table);

        match self.entries.entry(digest) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let bytes = serialize::to_csv(table)?;
                Ok(entry.insert(bytes).as_slice())
            }
        }
    }

    /// Nombre d'appels servis depuis le cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Nombre d'appels ayant déclenché une sérialisation
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Nombre d'entrées en cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vide le cache (les entrées seront recalculées à la demande)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table {
            headers: vec!["name".to_string()],
            rows: vec![vec!["Paris".to_string()]],
        }
    }

    #[test]
    fn test_same_content_same_digest() {
        let t1 = sample_table();
        let t2 = sample_table();
        assert_eq!(table_digest(&t1), table_digest(&t2));
    }

    #[test]
    fn test_different_content_different_digest() {
        let t1 = sample_table();
        let mut t2 = sample_table();
        t2.rows[0][0] = "Lyon".to_string();
        assert_ne!(table_digest(&t1), table_digest(&t2));
    }

    #[test]
    fn test_digest_not_fooled_by_field_concatenation() {
        // ["ab", "c"] et ["a", "bc"] contiennent les mêmes bytes
        let t1 = Table {
            headers: vec!["x".to_string(), "y".to_string()],
            rows: vec![vec!["ab".to_string(), "c".to_string()]],
        };
        let t2 = Table {
            headers: vec!["x".to_string(), "y".to_string()],
            rows: vec![vec!["a".to_string(), "bc".to_string()]],
        };
        assert_ne!(table_digest(&t1), table_digest(&t2));
    }

    #[test]
    fn test_cache_hit_on_equal_content() {
        let mut cache = CsvCache::new();
        let t1 = sample_table();
        let t2 = sample_table(); // objet distinct, contenu égal

        let first = cache.get_or_serialize(&t1).unwrap().to_vec();
        let second = cache.get_or_serialize(&t2).unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_recomputes_after_clear() {
        let mut cache = CsvCache::new();
        let table = sample_table();

        let before = cache.get_or_serialize(&table).unwrap().to_vec();
        cache.clear();
        assert!(cache.is_empty());
        let after = cache.get_or_serialize(&table).unwrap().to_vec();

        // Recalcul à l'identique: la sérialisation est une fonction pure
        assert_eq!(before, after);
        assert_eq!(cache.misses(), 2);
    }
}
