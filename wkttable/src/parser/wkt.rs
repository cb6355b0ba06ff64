//! Parser pour les valeurs WKT de la colonne géométrie

use geo::{Geometry, Point};
use wkt::TryFromWkt;

use crate::WktTableError;

/// Parse une valeur WKT en géométrie `geo`
pub fn parse_geometry(value: &str, row: usize) -> Result<Geometry<f64>, WktTableError> {
    Geometry::try_from_wkt_str(value.trim())
        .map_err(|e| WktTableError::wkt_parse(row, e.to_string()))
}

/// Parse une valeur WKT en point
///
/// Seul un POINT a une paire x/y bien définie: toute autre géométrie
/// (LINESTRING, POLYGON, ...) est rejetée avec son type dans l'erreur.
pub fn parse_point(value: &str, row: usize) -> Result<Point<f64>, WktTableError> {
    match parse_geometry(value, row)? {
        Geometry::Point(p) => Ok(p),
        other => Err(WktTableError::NotAPoint {
            row,
            geometry_type: geometry_type_name(&other).to_string(),
        }),
    }
}

/// Parse un lot de valeurs WKT en points, dans l'ordre
///
/// Tout-ou-rien: la première valeur invalide avorte le lot entier,
/// avec l'index de ligne (base 0) dans l'erreur.
pub fn parse_points<'a, I>(values: I) -> Result<Vec<Point<f64>>, WktTableError>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| parse_point(value, row))
        .collect()
}

/// Nom du type d'une géométrie, pour les messages d'erreur
fn geometry_type_name(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}
