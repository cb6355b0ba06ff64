//! Carte d'aperçu GeoJSON avec geozero (streaming)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Geometry, Point};
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;

use wkttable::Table;

/// Écrit les lignes d'une table augmentée en GeoJSON (un Point par ligne)
///
/// `points` doit être aligné sur `table.rows`, coordonnées WGS84.
/// L'index de ligne devient l'id de la feature, les colonnes de la table
/// deviennent ses properties.
pub fn write_geojson(table: &Table, points: &[Point<f64>], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    // Header FeatureCollection avec CRS
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::4326"}}}},"features":["#,
    )?;

    for (index, (row, point)) in table.rows.iter().zip(points).enumerate() {
        if index > 0 {
            write!(writer, ",")?;
        }
        write_feature(&mut writer, table, index, row, *point)?;
    }

    write!(writer, "]}}")?;
    writer.flush()?;

    Ok(())
}

/// Écrit une ligne de table en feature GeoJSON
fn write_feature<W: Write>(
    writer: &mut W,
    table: &Table,
    index: usize,
    row: &[String],
    point: Point<f64>,
) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","id":{},"#, index)?;

    // Geometry via geozero
    write!(writer, r#""geometry":"#)?;
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    Geometry::Point(point).process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    // Properties: les colonnes de la table
    write!(writer, r#","properties":{{"#)?;
    for (i, (header, value)) in table.headers.iter().zip(row).enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(
            writer,
            r#""{}":"{}""#,
            escape_json(header),
            escape_json(value)
        )?;
    }
    write!(writer, "}}}}")?;

    Ok(())
}

/// Échappe une chaîne pour JSON
fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
