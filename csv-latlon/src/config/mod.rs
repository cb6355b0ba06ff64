//! Configuration du convertisseur

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};

/// Configuration principale
///
/// Les valeurs absentes du fichier prennent leur défaut; les options CLI
/// surchargent le fichier.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Nom de la colonne contenant les géométries WKT
    pub geometry_column: String,

    /// Identifiant du CRS déclaré (code EPSG ou alias, ex: "4326", "EPSG:2154")
    pub crs: String,

    /// Nombre de lignes échantillonnées par `preview`
    pub sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry_column: "geometry".to_string(),
            crs: "4326".to_string(),
            sample_size: 3,
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }
}
