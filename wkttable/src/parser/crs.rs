//! Parser pour les identifiants de CRS fournis par l'utilisateur

use crate::types::Crs;
use crate::WktTableError;

/// Alias textuels acceptés en plus des codes EPSG numériques
const CRS_ALIASES: &[(&str, u32)] = &[
    ("WGS84", 4326),
    ("CRS84", 4326),
    ("WEBMERCATOR", 3857),
];

/// Parse un identifiant de CRS
///
/// Formes acceptées: `4326`, `EPSG:4326` (préfixe insensible à la casse),
/// et quelques alias usuels (`WGS84`, ...). Tout le reste est une erreur
/// `UnknownCrs` — la validation profonde (le code existe-t-il dans la base
/// EPSG) est du ressort du reprojecteur.
pub fn parse(input: &str) -> Result<Crs, WktTableError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(WktTableError::UnknownCrs(input.to_string()));
    }

    // Forme EPSG:NNNN
    let code_part = trimmed
        .strip_prefix("EPSG:")
        .or_else(|| trimmed.strip_prefix("epsg:"))
        .or_else(|| trimmed.strip_prefix("Epsg:"))
        .unwrap_or(trimmed);

    if let Ok(epsg) = code_part.parse::<u32>() {
        if epsg == 0 {
            return Err(WktTableError::UnknownCrs(input.to_string()));
        }
        return Ok(Crs { epsg });
    }

    // Alias textuels
    for &(name, epsg) in CRS_ALIASES {
        if code_part.eq_ignore_ascii_case(name) {
            return Ok(Crs { epsg });
        }
    }

    Err(WktTableError::UnknownCrs(input.to_string()))
}
