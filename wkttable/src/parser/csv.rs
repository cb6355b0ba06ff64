//! Parser pour le fichier CSV source

use csv::ReaderBuilder;

use crate::types::Table;
use crate::WktTableError;

/// Parse un fichier CSV (avec ligne d'en-tête) en `Table`
///
/// Les bytes sont validés UTF-8 avant parsing. Les lignes dont le nombre
/// de champs diffère de l'en-tête sont une erreur: le modèle est rectangulaire.
pub fn parse(data: &[u8]) -> Result<Table, WktTableError> {
    // Validation UTF-8 en amont (simdutf8), le lecteur CSV travaille ensuite sur &str
    let content = simdutf8::basic::from_utf8(data).map_err(|_| WktTableError::InvalidUtf8)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| WktTableError::invalid_csv(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(WktTableError::invalid_csv("empty input, no header row"));
    }

    let mut table = Table::new(headers);

    for record in reader.records() {
        let record = record.map_err(|e| WktTableError::invalid_csv(e.to_string()))?;
        table
            .rows
            .push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let data = b"name,geometry\nParis,\"POINT (2.35 48.85)\"\nLyon,\"POINT (4.83 45.76)\"\n";
        let table = parse(data).unwrap();
        assert_eq!(table.headers, vec!["name", "geometry"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], "POINT (2.35 48.85)");
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse(b"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_ragged_row_is_error() {
        let data = b"a,b\n1,2\n3\n";
        let result = parse(data);
        assert!(matches!(result, Err(WktTableError::InvalidCsv { .. })));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let data = [0x61, 0x2c, 0x62, 0x0a, 0xff, 0xfe, 0x2c, 0x31, 0x0a];
        let result = parse(&data);
        assert!(matches!(result, Err(WktTableError::InvalidUtf8)));
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse(b"name,geometry\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }
}
