//! Types d'erreurs pour le crate wkttable

use thiserror::Error;

/// Erreurs pouvant survenir lors de l'augmentation d'une table
#[derive(Debug, Error)]
pub enum WktTableError {
    /// Erreur d'I/O lors de la lecture du fichier source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Le fichier source n'est pas de l'UTF-8 valide
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    /// CSV malformé (ligne incomplète, guillemets non fermés, etc.)
    #[error("Invalid CSV: {reason}")]
    InvalidCsv { reason: String },

    /// Colonne géométrie absente de la table
    #[error("Missing column '{column}' (available: {available})")]
    MissingColumn { column: String, available: String },

    /// Valeur WKT non parseable
    #[error("WKT parse error at row {row}: {reason}")]
    WktParse { row: usize, reason: String },

    /// Géométrie valide mais sans coordonnée x/y unique
    #[error("Geometry at row {row} is a {geometry_type}, expected a POINT")]
    NotAPoint { row: usize, geometry_type: String },

    /// Identifiant de CRS non reconnu
    #[error("Unknown CRS identifier: {0}")]
    UnknownCrs(String),

    /// Nom de fichier ambigu pour la dérivation du nom de sortie
    #[error("Ambiguous filename '{0}': expected exactly one '.'")]
    AmbiguousFilename(String),
}

impl WktTableError {
    /// Crée une erreur CSV avec contexte
    pub fn invalid_csv(reason: impl Into<String>) -> Self {
        Self::InvalidCsv {
            reason: reason.into(),
        }
    }

    /// Crée une erreur de parsing WKT pour une ligne donnée
    pub fn wkt_parse(row: usize, reason: impl Into<String>) -> Self {
        Self::WktParse {
            row,
            reason: reason.into(),
        }
    }

    /// Crée une erreur de colonne manquante
    pub fn missing_column(column: impl Into<String>, available: &[String]) -> Self {
        Self::MissingColumn {
            column: column.into(),
            available: available.join(", "),
        }
    }
}
