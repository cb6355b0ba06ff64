//! Définition et implémentation des commandes CLI
//!
//! CLI simplifiée:
//! - `convert` (défaut): CSV -> CSV augmenté des colonnes lon/lat
//! - `preview`: échantillon de lignes transposé + carte GeoJSON optionnelle

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use geo::Point;
use rand::seq::SliceRandom;
use tracing::info;

use wkttable::{augment_csv, derive_filename, parser, AugmentOptions, Crs, CsvCache, Table};

use crate::config::Config;
use crate::report::ConvertReport;
use crate::reproject::{self, Reprojector};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CSV with a WKT geometry column into an augmented CSV
    Convert(ConvertArgs),

    /// Preview a sample of rows and optionally write a GeoJSON map
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path (défaut : `<nom>-lat-lon.<ext>` à côté de l'entrée)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the WKT geometry column (défaut : geometry)
    #[arg(long)]
    pub geometry_column: Option<String>,

    /// CRS of the geometry column (EPSG code or alias, défaut : 4326)
    #[arg(long)]
    pub crs: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write a GeoJSON map of the augmented rows (WGS84)
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of rows to sample (défaut : config sample_size)
    #[arg(short, long)]
    pub sample: Option<usize>,

    /// Name of the WKT geometry column (défaut : geometry)
    #[arg(long)]
    pub geometry_column: Option<String>,

    /// CRS of the geometry column (EPSG code or alias, défaut : 4326)
    #[arg(long)]
    pub crs: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a GeoJSON map of the augmented rows (WGS84)
    #[arg(long)]
    pub map: Option<PathBuf>,
}

/// Exécute la commande convert
pub fn cmd_convert(args: &ConvertArgs) -> Result<()> {
    let start = Instant::now();

    let (_, options) = resolve_options(
        args.config.as_deref(),
        args.geometry_column.as_deref(),
        args.crs.as_deref(),
    )?;

    let data = std::fs::read(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;

    let augmented = augment_csv(&data, &options)
        .with_context(|| format!("Failed to augment {}", args.input.display()))?;

    // Sérialiser via le cache adressé par contenu
    let mut cache = CsvCache::new();
    let bytes = cache.get_or_serialize(&augmented)?.to_vec();

    let output = match &args.output {
        Some(path) => path.clone(),
        None => derived_output_path(&args.input)?,
    };

    std::fs::write(&output, &bytes)
        .with_context(|| format!("Cannot write {}", output.display()))?;

    if let Some(map_path) = &args.map {
        write_map(&augmented, options.crs, map_path)?;
    }

    let report = ConvertReport {
        input: args.input.display().to_string(),
        output: output.display().to_string(),
        rows: augmented.row_count(),
        columns: augmented.column_count(),
        geometry_column: options.geometry_column.clone(),
        epsg: options.crs.epsg,
        bytes_written: bytes.len(),
        cache_hit: cache.hits() > 0,
        duration_secs: start.elapsed().as_secs_f64(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}

/// Exécute la commande preview
pub fn cmd_preview(args: &PreviewArgs) -> Result<()> {
    let (config, options) = resolve_options(
        args.config.as_deref(),
        args.geometry_column.as_deref(),
        args.crs.as_deref(),
    )?;
    let sample_size = args.sample.unwrap_or(config.sample_size);

    let data = std::fs::read(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;

    let augmented = augment_csv(&data, &options)
        .with_context(|| format!("Failed to augment {}", args.input.display()))?;

    let indices = sample_indices(augmented.row_count(), sample_size);
    print_transposed(&augmented, &indices);

    if let Some(map_path) = &args.map {
        write_map(&augmented, options.crs, map_path)?;
    }

    Ok(())
}

/// Fusionne configuration fichier, valeurs par défaut et surcharges CLI
fn resolve_options(
    config_path: Option<&Path>,
    geometry_column: Option<&str>,
    crs: Option<&str>,
) -> Result<(Config, AugmentOptions)> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(column) = geometry_column {
        config.geometry_column = column.to_string();
    }
    if let Some(crs) = crs {
        config.crs = crs.to_string();
    }

    let crs = parser::crs::parse(&config.crs)?;
    let options = AugmentOptions {
        geometry_column: config.geometry_column.clone(),
        crs,
    };

    Ok((config, options))
}

/// Chemin de sortie dérivé: `<nom>-lat-lon.<ext>` à côté de l'entrée
fn derived_output_path(input: &Path) -> Result<PathBuf> {
    let filename = input
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid input filename: {}", input.display()))?;

    let derived = derive_filename(filename)?;
    Ok(input.with_file_name(derived))
}

/// Tire `count` indices de lignes distincts, retournés en ordre croissant
fn sample_indices(row_count: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..row_count).collect();
    if count >= row_count {
        return indices;
    }

    let mut rng = rand::thread_rng();
    indices.shuffle(&mut rng);
    indices.truncate(count);
    indices.sort_unstable();
    indices
}

/// Affiche l'échantillon transposé: une ligne par colonne,
/// une colonne par ligne échantillonnée
fn print_transposed(table: &Table, indices: &[usize]) {
    let width = table.headers.iter().map(|h| h.len()).max().unwrap_or(0);

    let header_row: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    println!("{:>width$}  {}", "", header_row.join("  "), width = width);

    for (col, header) in table.headers.iter().enumerate() {
        let values: Vec<&str> = indices
            .iter()
            .map(|&i| table.rows[i][col].as_str())
            .collect();
        println!("{:>width$}  {}", header, values.join("  "), width = width);
    }
}

/// Écrit la carte GeoJSON (coordonnées WGS84)
fn write_map(table: &Table, crs: Crs, output: &Path) -> Result<()> {
    let mut points = table_points(table)?;

    // Reprojeter vers WGS84 si le CRS déclaré n'est pas 4326
    if crs.epsg != 4326 {
        anyhow::ensure!(
            reproject::is_available(),
            "Map preview for EPSG:{} requires the 'reproject' feature",
            crs.epsg
        );
        let reprojector = Reprojector::new(crs.epsg, 4326)?;
        points = reprojector.transform_points(&points)?;
    }

    crate::map::write_geojson(table, &points, output)?;
    info!("Map written to {}", output.display());

    Ok(())
}

/// Relit les colonnes lon/lat d'une table augmentée en points
fn table_points(table: &Table) -> Result<Vec<Point<f64>>> {
    let lon_idx = table.column_index(wkttable::LON_COLUMN)?;
    let lat_idx = table.column_index(wkttable::LAT_COLUMN)?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(row, fields)| {
            let lon: f64 = fields[lon_idx]
                .parse()
                .with_context(|| format!("Invalid lon value at row {}", row))?;
            let lat: f64 = fields[lat_idx]
                .parse()
                .with_context(|| format!("Invalid lat value at row {}", row))?;
            Ok(Point::new(lon, lat))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_output_path() {
        let path = derived_output_path(Path::new("data/cities.csv")).unwrap();
        assert_eq!(path, PathBuf::from("data/cities-lat-lon.csv"));
    }

    #[test]
    fn test_derived_output_path_two_dots_rejected() {
        assert!(derived_output_path(Path::new("data.points.csv")).is_err());
    }

    #[test]
    fn test_sample_indices_bounds() {
        let indices = sample_indices(10, 3);
        assert_eq!(indices.len(), 3);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_sample_indices_all_rows_when_count_exceeds() {
        let indices = sample_indices(2, 5);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_table_points() {
        let table = Table {
            headers: vec!["name".to_string(), "lon".to_string(), "lat".to_string()],
            rows: vec![vec![
                "Paris".to_string(),
                "2.3522".to_string(),
                "48.8566".to_string(),
            ]],
        };
        let points = table_points(&table).unwrap();
        assert_eq!(points[0].x(), 2.3522);
        assert_eq!(points[0].y(), 48.8566);
    }
}
