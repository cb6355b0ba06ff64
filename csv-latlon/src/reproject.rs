//! Reprojection de coordonnées avec PROJ
//!
//! Ce module est disponible uniquement avec le feature `reproject`.

#[cfg(feature = "reproject")]
use anyhow::{Context, Result};
#[cfg(feature = "reproject")]
use geo::Point;
#[cfg(feature = "reproject")]
use proj::Proj;

/// Reprojection de points entre deux systèmes de coordonnées
#[cfg(feature = "reproject")]
pub struct Reprojector {
    proj: Proj,
    source_epsg: u32,
    target_epsg: u32,
}

#[cfg(feature = "reproject")]
impl Reprojector {
    /// Crée un nouveau reprojector entre deux EPSG
    ///
    /// Échoue si l'un des codes est inconnu de PROJ: c'est la validation
    /// profonde des identifiants de CRS déclarés.
    pub fn new(source_epsg: u32, target_epsg: u32) -> Result<Self> {
        let source = format!("EPSG:{}", source_epsg);
        let target = format!("EPSG:{}", target_epsg);

        let proj = Proj::new_known_crs(&source, &target, None).context(format!(
            "Failed to create projection from {} to {}",
            source, target
        ))?;

        Ok(Self {
            proj,
            source_epsg,
            target_epsg,
        })
    }

    /// Retourne le SRID source
    pub fn source_epsg(&self) -> u32 {
        self.source_epsg
    }

    /// Retourne le SRID cible
    pub fn target_epsg(&self) -> u32 {
        self.target_epsg
    }

    /// Transforme un point unique
    pub fn transform_point(&self, point: Point<f64>) -> Result<Point<f64>> {
        if self.source_epsg == self.target_epsg {
            return Ok(point);
        }

        let (x, y) = self
            .proj
            .convert((point.x(), point.y()))
            .context("Coordinate transformation failed")?;
        Ok(Point::new(x, y))
    }

    /// Transforme un lot de points (batch conversion)
    pub fn transform_points(&self, points: &[Point<f64>]) -> Result<Vec<Point<f64>>> {
        if self.source_epsg == self.target_epsg {
            return Ok(points.to_vec());
        }

        let mut coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();

        // Transformation batch - beaucoup plus rapide que point par point
        self.proj
            .convert_array(&mut coords)
            .context("Batch coordinate transformation failed")?;

        Ok(coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }
}

#[cfg(feature = "reproject")]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambert93_to_wgs84() {
        // Point connu: Paris (environ)
        // Lambert-93: X=652381, Y=6862047
        // WGS84: lon=2.35, lat=48.85 (approximatif)
        let reprojector = Reprojector::new(2154, 4326).unwrap();

        let paris = reprojector
            .transform_point(Point::new(652381.0, 6862047.0))
            .unwrap();

        assert!(
            paris.x() > 2.0 && paris.x() < 3.0,
            "Longitude should be around 2.35, got {}",
            paris.x()
        );
        assert!(
            paris.y() > 48.0 && paris.y() < 49.0,
            "Latitude should be around 48.85, got {}",
            paris.y()
        );
    }

    #[test]
    fn test_identity_transform() {
        let reprojector = Reprojector::new(4326, 4326).unwrap();

        let point = reprojector
            .transform_point(Point::new(2.35, 48.85))
            .unwrap();

        assert!((point.x() - 2.35).abs() < 0.0001);
        assert!((point.y() - 48.85).abs() < 0.0001);
    }

    #[test]
    fn test_batch_matches_single() {
        let reprojector = Reprojector::new(2154, 4326).unwrap();

        let points = vec![
            Point::new(652381.0, 6862047.0),
            Point::new(652481.0, 6862147.0),
        ];
        let batch = reprojector.transform_points(&points).unwrap();

        for (point, expected) in points.iter().zip(&batch) {
            let single = reprojector.transform_point(*point).unwrap();
            assert!((single.x() - expected.x()).abs() < 1e-9);
            assert!((single.y() - expected.y()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_epsg() {
        let result = Reprojector::new(99999, 4326);
        assert!(result.is_err());
    }
}

// Fonction publique sans feature pour permettre l'utilisation conditionnelle
/// Vérifie si la reprojection est disponible
pub fn is_available() -> bool {
    cfg!(feature = "reproject")
}

// Implémentation factice quand le feature reproject est désactivé
#[cfg(not(feature = "reproject"))]
use anyhow::{bail, Result};
#[cfg(not(feature = "reproject"))]
use geo::Point;

/// Reprojector factice - pas de reprojection disponible
#[cfg(not(feature = "reproject"))]
pub struct Reprojector;

#[cfg(not(feature = "reproject"))]
impl Reprojector {
    /// Tente de créer un reprojector - échoue toujours sans la feature
    pub fn new(source_epsg: u32, target_epsg: u32) -> Result<Self> {
        if source_epsg == target_epsg {
            Ok(Self)
        } else {
            bail!(
                "Reprojection from EPSG:{} to EPSG:{} requires the 'reproject' feature. \
                 Build with: cargo build --features reproject",
                source_epsg,
                target_epsg
            )
        }
    }

    /// Retourne les points inchangés (pas de reprojection)
    pub fn transform_points(&self, points: &[Point<f64>]) -> Result<Vec<Point<f64>>> {
        Ok(points.to_vec())
    }
}
