//! Sérialisation d'une `Table` en CSV (bytes UTF-8)

use csv::WriterBuilder;

use crate::types::Table;
use crate::WktTableError;

/// Sérialise une table en CSV
///
/// Format: ligne d'en-tête, une ligne par enregistrement, séparateur `,`,
/// fins de ligne `\n`. Une colonne d'index (en-tête vide, valeurs 0..n)
/// est ajoutée en tête, comme dans la sérialisation tabulaire d'origine.
///
/// Déterministe: le même contenu de table produit les mêmes bytes.
pub fn to_csv(table: &Table) -> Result<Vec<u8>, WktTableError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let mut header: Vec<&str> = Vec::with_capacity(table.column_count() + 1);
    header.push("");
    header.extend(table.headers.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| WktTableError::invalid_csv(e.to_string()))?;

    for (index, row) in table.rows.iter().enumerate() {
        let index_field = index.to_string();
        let mut record: Vec<&str> = Vec::with_capacity(row.len() + 1);
        record.push(&index_field);
        record.extend(row.iter().map(String::as_str));
        writer
            .write_record(&record)
            .map_err(|e| WktTableError::invalid_csv(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| WktTableError::invalid_csv(e.to_string()))
}
