//! # csv-latlon
//!
//! Conversion de fichiers CSV avec colonne de géométries WKT en CSV
//! augmenté des colonnes `lon`/`lat`.
//!
//! ## Features
//!
//! - Conversion CSV -> CSV augmenté (lon/lat dérivés de la colonne WKT)
//! - Aperçu: échantillon de lignes transposé + carte GeoJSON
//! - Reprojection optionnelle de la carte vers WGS84 (feature `reproject`)
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Conversion (nom de sortie dérivé: cities-lat-lon.csv)
//! csv-latlon --input cities.csv
//!
//! # Colonne et CRS explicites, carte GeoJSON en plus
//! csv-latlon convert --input sites.csv --geometry-column wkt --crs 2154 --map sites.geojson
//!
//! # Aperçu (échantillon transposé)
//! csv-latlon preview --input cities.csv --sample 3
//! ```

pub mod config;
pub mod map;
pub mod report;
pub mod reproject;

pub use config::Config;
pub use report::ConvertReport;
