//! Opération parse-and-derive: colonne WKT -> colonnes lon/lat

use tracing::debug;

use crate::parser;
use crate::types::{AugmentOptions, Table};
use crate::WktTableError;

/// Nom de la colonne longitude ajoutée
pub const LON_COLUMN: &str = "lon";

/// Nom de la colonne latitude ajoutée
pub const LAT_COLUMN: &str = "lat";

/// Dérive les colonnes `lon`/`lat` depuis la colonne géométrie
///
/// Retourne une nouvelle table: mêmes lignes et colonnes que l'entrée
/// (jamais mutée), plus `lon` (x) et `lat` (y) en fin, dans l'ordre des
/// lignes d'origine. Les coordonnées sont exprimées dans le CRS déclaré,
/// sans reprojection.
///
/// # Errors
///
/// - `MissingColumn` si la colonne géométrie est absente (avant tout parsing)
/// - `WktParse` / `NotAPoint` à la première valeur invalide (lot entier avorté)
pub fn augment(table: &Table, options: &AugmentOptions) -> Result<Table, WktTableError> {
    // 1. Vérifier la colonne avant de toucher aux lignes
    let geometry_values = table.column(&options.geometry_column)?;

    // 2. Parser toutes les valeurs WKT (tout-ou-rien)
    let points = parser::wkt::parse_points(geometry_values)?;

    debug!(
        rows = table.row_count(),
        column = %options.geometry_column,
        epsg = options.crs.epsg,
        "Parsed geometry column"
    );

    // 3. Construire la table augmentée, entrée intacte
    let mut augmented = table.clone();
    augmented.push_column(
        LON_COLUMN,
        points.iter().map(|p| format_coord(p.x())).collect(),
    );
    augmented.push_column(
        LAT_COLUMN,
        points.iter().map(|p| format_coord(p.y())).collect(),
    );

    Ok(augmented)
}

/// Formate une coordonnée en texte
///
/// Le `Display` de `f64` produit la représentation la plus courte qui
/// round-trip exactement, ce qui rend la sérialisation CSV réversible.
fn format_coord(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Crs;

    fn sample_table() -> Table {
        Table {
            headers: vec!["city".to_string(), "geometry".to_string()],
            rows: vec![
                vec!["Paris".to_string(), "POINT (2.3522 48.8566)".to_string()],
                vec!["Lyon".to_string(), "POINT (4.8357 45.764)".to_string()],
            ],
        }
    }

    #[test]
    fn test_augment_appends_lon_lat() {
        let table = sample_table();
        let augmented = augment(&table, &AugmentOptions::default()).unwrap();

        assert_eq!(augmented.headers, vec!["city", "geometry", "lon", "lat"]);
        assert_eq!(augmented.row_count(), 2);
        assert_eq!(augmented.rows[0][2], "2.3522");
        assert_eq!(augmented.rows[0][3], "48.8566");
        assert_eq!(augmented.rows[1][2], "4.8357");
        assert_eq!(augmented.rows[1][3], "45.764");
    }

    #[test]
    fn test_augment_preserves_original_columns() {
        let table = sample_table();
        let augmented = augment(&table, &AugmentOptions::default()).unwrap();

        for (original, new) in table.rows.iter().zip(&augmented.rows) {
            assert_eq!(&new[..original.len()], &original[..]);
        }
    }

    #[test]
    fn test_augment_does_not_mutate_input() {
        let table = sample_table();
        let before = table.clone();
        let _ = augment(&table, &AugmentOptions::default()).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_augment_integer_coordinates() {
        let table = Table {
            headers: vec!["geometry".to_string()],
            rows: vec![vec!["POINT (10 20)".to_string()]],
        };
        let augmented = augment(&table, &AugmentOptions::default()).unwrap();
        assert_eq!(augmented.rows[0][1], "10");
        assert_eq!(augmented.rows[0][2], "20");
        assert_eq!(augmented.rows[0][1].parse::<f64>().unwrap(), 10.0);
        assert_eq!(augmented.rows[0][2].parse::<f64>().unwrap(), 20.0);
    }

    #[test]
    fn test_augment_missing_column_before_any_parsing() {
        // Colonne 'geom' au lieu de 'geometry': échec avant tout parsing WKT,
        // même si les valeurs sont invalides
        let table = Table {
            headers: vec!["geom".to_string()],
            rows: vec![vec!["garbage".to_string()]],
        };
        let result = augment(&table, &AugmentOptions::default());
        assert!(matches!(result, Err(WktTableError::MissingColumn { .. })));
    }

    #[test]
    fn test_augment_bad_wkt_aborts_whole_batch() {
        let table = Table {
            headers: vec!["geometry".to_string()],
            rows: vec![
                vec!["POINT (1 2)".to_string()],
                vec!["NOT A POINT".to_string()],
            ],
        };
        let result = augment(&table, &AugmentOptions::default());
        match result {
            Err(WktTableError::WktParse { row, .. }) => assert_eq!(row, 1),
            _ => panic!("Expected WktParse error"),
        }
    }

    #[test]
    fn test_augment_custom_column_and_crs() {
        let table = Table {
            headers: vec!["wkt_geom".to_string()],
            rows: vec![vec!["POINT (652381 6862047)".to_string()]],
        };
        let options = AugmentOptions {
            geometry_column: "wkt_geom".to_string(),
            crs: Crs { epsg: 2154 },
        };
        let augmented = augment(&table, &options).unwrap();
        // Les valeurs restent dans le CRS déclaré (pas de reprojection implicite)
        assert_eq!(augmented.rows[0][1], "652381");
        assert_eq!(augmented.rows[0][2], "6862047");
    }
}
