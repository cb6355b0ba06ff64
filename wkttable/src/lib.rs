//! # wkttable
//!
//! Augmentation de tables CSV: dérive des colonnes `lon`/`lat` depuis une
//! colonne de géométries WKT (points) dans un CRS déclaré.
//!
//! ## Features
//!
//! - Parsing CSV avec validation UTF-8 (`simdutf8`)
//! - Parsing WKT vers les types `geo` pour l'interopérabilité avec
//!   l'écosystème Rust géospatial
//! - Sérialisation CSV déterministe avec cache adressé par contenu (blake3)
//! - Erreurs typées par étape (colonne absente, WKT invalide, CRS inconnu)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wkttable::{augment_csv, AugmentOptions};
//!
//! let data = std::fs::read("cities.csv")?;
//! let augmented = augment_csv(&data, &AugmentOptions::default())?;
//! println!("{} rows, {} columns", augmented.row_count(), augmented.column_count());
//! ```

pub mod augment;
pub mod cache;
pub mod error;
pub mod parser;
pub mod serialize;
pub mod types;

pub use augment::{augment, LAT_COLUMN, LON_COLUMN};
pub use cache::{table_digest, CsvCache};
pub use error::WktTableError;
pub use serialize::to_csv;
pub use types::{AugmentOptions, Crs, Table};

/// Dérive le nom du fichier de sortie depuis le nom du fichier source
/// Format attendu: `<nom>.<ext>` avec exactement un point
/// `cities.csv` devient `cities-lat-lon.csv`
pub fn derive_filename(filename: &str) -> Result<String, WktTableError> {
    let dot_count = filename.matches('.').count();
    if dot_count != 1 {
        return Err(WktTableError::AmbiguousFilename(filename.to_string()));
    }

    let (stem, ext) = filename
        .split_once('.')
        .ok_or_else(|| WktTableError::AmbiguousFilename(filename.to_string()))?;

    if stem.is_empty() || ext.is_empty() {
        return Err(WktTableError::AmbiguousFilename(filename.to_string()));
    }

    Ok(format!("{}-lat-lon.{}", stem, ext))
}


/// Parse un fichier CSV et dérive les colonnes `lon`/`lat`.
///
/// # Arguments
///
/// * `data` - Bytes du fichier CSV (UTF-8, avec ligne d'en-tête)
/// * `options` - Nom de la colonne géométrie et CRS déclaré
///
/// # Returns
///
/// La table augmentée: colonnes d'origine inchangées plus `lon` et `lat`,
/// dans l'ordre des lignes du fichier.
///
/// # Errors
///
/// Retourne `WktTableError` si le fichier n'est pas un CSV UTF-8 valide,
/// si la colonne géométrie est absente, ou si une valeur WKT est invalide
/// ou n'est pas un point (le lot entier est avorté).
pub fn augment_csv(data: &[u8], options: &AugmentOptions) -> Result<Table, WktTableError> {
    // 1. Parser le CSV source
    let table = parser::csv::parse(data)?;

    // 2. Dériver lon/lat (la table source reste intacte)
    augment::augment(&table, options)
}
