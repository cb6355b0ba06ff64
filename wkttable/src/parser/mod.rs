//! Parsers pour les entrées du pipeline: CSV source, valeurs WKT, identifiants CRS

pub mod crs;
pub mod csv;
pub mod wkt;
