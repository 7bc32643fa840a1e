//! Forward Gauss-Kruger (transverse Mercator) projection.
//!
//! The pipeline measures densities and areas in meters, so geographic
//! coordinates are projected into a CGCS2000 3-degree Gauss-Kruger zone
//! (the default central meridian of 114 degrees east corresponds to
//! EPSG:4547). The forward series below is the standard Snyder expansion,
//! accurate to well under a millimeter within a zone.

/// CGCS2000 semi-major axis in meters.
const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// CGCS2000 inverse flattening.
const INVERSE_FLATTENING: f64 = 298.257_222_101;
/// Gauss-Kruger false easting in meters.
const FALSE_EASTING: f64 = 500_000.0;

/// A fixed-meridian planar projection from WGS84 to Gauss-Kruger meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    central_meridian_rad: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(114.0)
    }
}

impl Projection {
    /// Creates a projection centered on the given meridian (degrees east).
    #[must_use]
    pub fn new(central_meridian_deg: f64) -> Self {
        Self {
            central_meridian_rad: central_meridian_deg.to_radians(),
        }
    }

    /// Projects WGS84 (longitude, latitude) degrees to planar (x, y) meters.
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn forward(&self, longitude_deg: f64, latitude_deg: f64) -> (f64, f64) {
        let lambda = longitude_deg.to_radians();
        let phi = latitude_deg.to_radians();

        let f = 1.0 / INVERSE_FLATTENING;
        let e2 = f * (2.0 - f);
        let ep2 = e2 / (1.0 - e2);

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = SEMI_MAJOR_AXIS / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (lambda - self.central_meridian_rad) * cos_phi;

        let m = meridian_arc(phi, e2);

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0)
            + FALSE_EASTING;
        let y = m + n
            * tan_phi
            * (a2 / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0);

        (x, y)
    }
}

/// Meridian arc length from the equator to latitude `phi`.
fn meridian_arc(phi: f64, e2: f64) -> f64 {
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    SEMI_MAJOR_AXIS
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn central_meridian_maps_to_false_easting() {
        let proj = Projection::default();
        let (x, _) = proj.forward(114.0, 22.6);
        assert_relative_eq!(x, FALSE_EASTING, epsilon = 1e-6);
    }

    #[test]
    fn equator_maps_to_zero_northing() {
        let proj = Projection::default();
        let (_, y) = proj.forward(114.0, 0.0);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_is_about_110_km() {
        let proj = Projection::default();
        let (_, y1) = proj.forward(114.0, 22.0);
        let (_, y2) = proj.forward(114.0, 23.0);
        let span = y2 - y1;
        assert!((110_000.0..112_000.0).contains(&span), "span {span}");
    }

    #[test]
    fn east_of_meridian_increases_easting() {
        let proj = Projection::default();
        let (x_west, _) = proj.forward(113.9, 22.6);
        let (x_east, _) = proj.forward(114.1, 22.6);
        assert!(x_west < FALSE_EASTING && FALSE_EASTING < x_east);

        // ~0.1 degree of longitude at 22.6N is roughly 10.2 km.
        let span = x_east - x_west;
        assert!((20_000.0..21_000.0).contains(&span), "span {span}");
    }
}
