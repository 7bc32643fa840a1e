//! Study-area boundary handling.
//!
//! Parses the boundary GeoJSON (a geometry, feature, or feature collection
//! of polygons), reprojects it into the planar system, and provides the
//! strict point-membership test the normalizer filters against.

use geo::{BoundingRect, Contains, MapCoords, MultiPolygon, Point, Polygon, Rect, coord};
use geojson::GeoJson;

use crate::{Projection, SpatialError};

/// The projected study-area boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    polygon: MultiPolygon<f64>,
}

impl Boundary {
    /// Parses a WGS84 GeoJSON boundary and projects it to the plane.
    ///
    /// Accepts a bare geometry, a feature, or a feature collection; all
    /// polygon parts are merged into one multipolygon.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Geojson`] on malformed GeoJSON and
    /// [`SpatialError::InvalidBoundary`] when no polygon geometry is found.
    pub fn from_geojson(raw: &str, projection: &Projection) -> Result<Self, SpatialError> {
        let geojson: GeoJson = raw.parse()?;

        let mut polygons: Vec<Polygon<f64>> = Vec::new();
        match geojson {
            GeoJson::Geometry(geometry) => collect_polygons(geometry, &mut polygons)?,
            GeoJson::Feature(feature) => {
                if let Some(geometry) = feature.geometry {
                    collect_polygons(geometry, &mut polygons)?;
                }
            }
            GeoJson::FeatureCollection(collection) => {
                for feature in collection.features {
                    if let Some(geometry) = feature.geometry {
                        collect_polygons(geometry, &mut polygons)?;
                    }
                }
            }
        }

        let wgs84 = MultiPolygon::new(polygons);
        Self::from_wgs84(wgs84, projection)
    }

    /// Projects an already-parsed WGS84 multipolygon to the plane.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidBoundary`] for an empty geometry.
    pub fn from_wgs84(
        wgs84: MultiPolygon<f64>,
        projection: &Projection,
    ) -> Result<Self, SpatialError> {
        let polygon = wgs84.map_coords(|c| {
            let (x, y) = projection.forward(c.x, c.y);
            coord! { x: x, y: y }
        });
        Self::from_projected(polygon)
    }

    /// Wraps a multipolygon already expressed in planar meters.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidBoundary`] for an empty geometry.
    pub fn from_projected(polygon: MultiPolygon<f64>) -> Result<Self, SpatialError> {
        if polygon.0.is_empty() || polygon.bounding_rect().is_none() {
            return Err(SpatialError::InvalidBoundary);
        }
        Ok(Self { polygon })
    }

    /// Strict spatial membership test for a projected point.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.polygon.contains(&Point::new(x, y))
    }

    /// Bounding box of the projected boundary.
    ///
    /// Guaranteed present; emptiness is rejected at construction.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect<f64> {
        self.polygon
            .bounding_rect()
            .unwrap_or_else(|| Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.0, y: 0.0 }))
    }

    /// The projected boundary geometry.
    #[must_use]
    pub const fn polygon(&self) -> &MultiPolygon<f64> {
        &self.polygon
    }
}

fn collect_polygons(
    geometry: geojson::Geometry,
    out: &mut Vec<Polygon<f64>>,
) -> Result<(), SpatialError> {
    let geometry: geo::Geometry<f64> = geometry.try_into()?;
    match geometry {
        geo::Geometry::Polygon(polygon) => out.push(polygon),
        geo::Geometry::MultiPolygon(multi) => out.extend(multi.0),
        // Lines and points cannot bound a study area; skip them.
        _ => {}
    }
    Ok(())
}
