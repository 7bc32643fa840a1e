//! Result export.
//!
//! Centers become a GeoJSON feature collection in the projected planar
//! system; the location-quotient table becomes a CSV. Output file names
//! derive from the boundary file stem.

use std::path::Path;

use center_map_analytics_models::{CenterRecord, LocationQuotientRecord};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};

/// Builds one GeoJSON feature for a graded center.
#[must_use]
pub fn center_feature(center: &CenterRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), center.id.into());
    properties.insert("area".to_string(), center.area.into());
    properties.insert(
        "poiCount".to_string(),
        u64::try_from(center.poi_count).unwrap_or(u64::MAX).into(),
    );
    properties.insert("tier".to_string(), center.tier.to_string().into());
    properties.insert("function".to_string(), center.function.to_string().into());
    properties.insert("topLq".to_string(), center.top_quotient.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&center.geometry))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Writes the center table as a GeoJSON feature collection.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_centers(
    path: &Path,
    centers: &[CenterRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    let collection = FeatureCollection {
        bbox: None,
        features: centers.iter().map(center_feature).collect(),
        foreign_members: None,
    };
    std::fs::write(path, GeoJson::from(collection).to_string())?;
    Ok(())
}

/// Writes the location-quotient table as CSV.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_quotients(
    path: &Path,
    quotients: &[LocationQuotientRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for quotient in quotients {
        writer.serialize(quotient)?;
    }
    writer.flush()?;
    Ok(())
}

/// Output naming stem taken from the boundary file name.
#[must_use]
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "analysis".to_string(), |s| s.to_string_lossy().into_owned())
}
