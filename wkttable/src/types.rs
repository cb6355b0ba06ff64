//! Types de données pour le crate wkttable

use crate::WktTableError;

/// Table rectangulaire: en-têtes nommés + lignes de champs texte
///
/// Invariant: chaque ligne contient exactement `headers.len()` champs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Noms de colonnes, dans l'ordre du fichier source
    pub headers: Vec<String>,

    /// Lignes, dans l'ordre du fichier source
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Crée une table vide avec les en-têtes donnés
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Nombre de lignes
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Nombre de colonnes
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index de la colonne portant ce nom, ou erreur MissingColumn
    pub fn column_index(&self, name: &str) -> Result<usize, WktTableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| WktTableError::missing_column(name, &self.headers))
    }

    /// Valeurs d'une colonne, dans l'ordre des lignes
    pub fn column(&self, name: &str) -> Result<Vec<&str>, WktTableError> {
        let idx = self.column_index(name)?;
        // L'invariant rectangulaire garantit la présence du champ
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Ajoute une colonne en fin de table
    ///
    /// `values` doit contenir exactement une valeur par ligne.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}

/// Système de coordonnées de référence déclaré pour la colonne géométrie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crs {
    /// Code EPSG
    pub epsg: u32,
}

impl Default for Crs {
    fn default() -> Self {
        Self { epsg: 4326 } // WGS84 par défaut
    }
}

/// Options de l'opération parse-and-derive
#[derive(Debug, Clone)]
pub struct AugmentOptions {
    /// Nom de la colonne contenant les géométries WKT
    pub geometry_column: String,

    /// CRS déclaré des géométries
    pub crs: Crs,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            geometry_column: "geometry".to_string(),
            crs: Crs::default(),
        }
    }
}
