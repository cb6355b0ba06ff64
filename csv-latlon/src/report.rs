//! Rapport de conversion

use serde::Serialize;

/// Résumé d'une conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// Fichier source
    pub input: String,
    /// Fichier produit
    pub output: String,
    /// Nombre de lignes converties
    pub rows: usize,
    /// Nombre de colonnes (lon/lat incluses)
    pub columns: usize,
    /// Colonne géométrie utilisée
    pub geometry_column: String,
    /// CRS déclaré
    pub epsg: u32,
    /// Taille du CSV écrit en bytes
    pub bytes_written: usize,
    /// Sérialisation servie depuis le cache
    pub cache_hit: bool,
    /// Durée de la conversion
    pub duration_secs: f64,
}

impl ConvertReport {
    /// Affiche le résumé lisible sur stdout
    pub fn print_summary(&self) {
        println!("=== Convert ===");
        println!("Input: {}", self.input);
        println!("Output: {}", self.output);
        println!("Rows: {}", self.rows);
        println!("Columns: {}", self.columns);
        println!("Geometry column: {}", self.geometry_column);
        println!("CRS: EPSG:{}", self.epsg);
        println!("Bytes written: {}", self.bytes_written);
        if self.cache_hit {
            println!("Serialization: cache hit");
        }
        println!("Duration: {:.2}s", self.duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = ConvertReport {
            input: "cities.csv".to_string(),
            output: "cities-lat-lon.csv".to_string(),
            rows: 3,
            columns: 5,
            geometry_column: "geometry".to_string(),
            epsg: 4326,
            bytes_written: 128,
            cache_hit: false,
            duration_secs: 0.01,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""rows":3"#));
        assert!(json.contains(r#""epsg":4326"#));
        assert!(json.contains(r#""cache_hit":false"#));
    }
}
