//! OSGB36 national grid to WGS84 geographic coordinates.
//!
//! Closed-form inverse Transverse Mercator on the Airy 1830 ellipsoid,
//! followed by a fixed 7-parameter Helmert datum shift into WGS84. All
//! projection constants are hard-coded (there is exactly one national grid);
//! the only iteration is the fixed-point refinement inherent to the inverse
//! meridional arc and to the cartesian→geodetic latitude recovery.
//!
//! Accuracy: better than 1×10⁻⁷ degrees against the Ordnance Survey
//! reference conversion over the grid's valid domain.

use crate::error::GridError;
use crate::geometry::primitives::check_len;

/// Airy 1830 semi-major axis (m).
const AIRY_A: f64 = 6_377_563.396;
/// Airy 1830 semi-minor axis (m).
const AIRY_B: f64 = 6_356_256.909;
/// National grid central-meridian scale factor.
const SCALE_F0: f64 = 0.999_601_271_7;
/// True origin: 49°N, 2°W.
const LAT0_DEG: f64 = 49.0;
const LON0_DEG: f64 = -2.0;
/// False origin offsets (m).
const EAST0: f64 = 400_000.0;
const NORTH0: f64 = -100_000.0;

/// WGS84/GRS80 semi-major and semi-minor axes (m).
const WGS84_A: f64 = 6_378_137.0;
const WGS84_B: f64 = 6_356_752.3141;

/// Helmert shift OSGB36 → WGS84: translations (m), scale (ppm applied as
/// parts), rotations (arc-seconds).
const HELMERT_TX: f64 = 446.448;
const HELMERT_TY: f64 = -125.157;
const HELMERT_TZ: f64 = 542.060;
const HELMERT_S: f64 = -20.4894e-6;
const HELMERT_RX_AS: f64 = 0.1502;
const HELMERT_RY_AS: f64 = 0.2470;
const HELMERT_RZ_AS: f64 = 0.8421;

/// Convert one OSGB36 easting/northing pair to WGS84 (longitude, latitude)
/// in decimal degrees.
pub fn osgb36_to_wgs84(easting: f64, northing: f64) -> (f64, f64) {
    let a = AIRY_A;
    let b = AIRY_B;
    let e2 = 1.0 - (b * b) / (a * a);
    let n = (a - b) / (a + b);
    let lat0 = LAT0_DEG.to_radians();
    let lon0 = LON0_DEG.to_radians();

    // Fixed-point inversion of the meridional arc to 0.01 mm.
    let mut lat = lat0;
    let mut arc = 0.0;
    while northing - NORTH0 - arc >= 1e-5 {
        lat += (northing - NORTH0 - arc) / (a * SCALE_F0);
        arc = meridional_arc(lat, lat0, b, n);
    }

    let sin2 = lat.sin() * lat.sin();
    let nu = a * SCALE_F0 / (1.0 - e2 * sin2).sqrt();
    let rho = a * SCALE_F0 * (1.0 - e2) * (1.0 - e2 * sin2).powf(-1.5);
    let eta2 = nu / rho - 1.0;

    // Inverse Transverse Mercator series, terms VII..XIIA.
    let tan = lat.tan();
    let tan2 = tan * tan;
    let tan4 = tan2 * tan2;
    let sec = 1.0 / lat.cos();
    let vii = tan / (2.0 * rho * nu);
    let viii = tan / (24.0 * rho * nu.powi(3))
        * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
    let ix = tan / (720.0 * rho * nu.powi(5)) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
    let x_term = sec / nu;
    let xi = sec / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan2);
    let xii = sec / (120.0 * nu.powi(5)) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
    let xiia = sec / (5040.0 * nu.powi(7))
        * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan4 * tan2);
    let de = easting - EAST0;

    let lat_osgb = lat - vii * de.powi(2) + viii * de.powi(4) - ix * de.powi(6);
    let lon_osgb =
        lon0 + x_term * de - xi * de.powi(3) + xii * de.powi(5) - xiia * de.powi(7);

    // Geodetic → cartesian on Airy (height 0).
    let nu_geo = nu / SCALE_F0;
    let x1 = nu_geo * lat_osgb.cos() * lon_osgb.cos();
    let y1 = nu_geo * lat_osgb.cos() * lon_osgb.sin();
    let z1 = (1.0 - e2) * nu_geo * lat_osgb.sin();

    // Helmert datum shift into WGS84.
    let rx = (HELMERT_RX_AS / 3600.0).to_radians();
    let ry = (HELMERT_RY_AS / 3600.0).to_radians();
    let rz = (HELMERT_RZ_AS / 3600.0).to_radians();
    let s1 = 1.0 + HELMERT_S;
    let x2 = HELMERT_TX + s1 * x1 - rz * y1 + ry * z1;
    let y2 = HELMERT_TY + rz * x1 + s1 * y1 - rx * z1;
    let z2 = HELMERT_TZ - ry * x1 + rx * y1 + s1 * z1;

    // Cartesian → geodetic on WGS84, fixed-point latitude.
    let e2w = 1.0 - (WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);
    let p = x2.hypot(y2);
    let mut lat_w = z2.atan2(p * (1.0 - e2w));
    let mut lat_old = std::f64::consts::TAU;
    while (lat_w - lat_old).abs() > 1e-16 {
        lat_old = lat_w;
        let nu_w = WGS84_A / (1.0 - e2w * lat_old.sin() * lat_old.sin()).sqrt();
        lat_w = (z2 + e2w * nu_w * lat_old.sin()).atan2(p);
    }
    let lon_w = y2.atan2(x2);

    (lon_w.to_degrees(), lat_w.to_degrees())
}

/// Batch form of [`osgb36_to_wgs84`] over parallel coordinate slices.
pub fn osgb36_to_wgs84_batch(
    easting: &[f64],
    northing: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), GridError> {
    check_len("northing coordinates", easting.len(), northing.len())?;
    Ok(easting
        .iter()
        .zip(northing)
        .map(|(&e, &n)| osgb36_to_wgs84(e, n))
        .unzip())
}

/// Meridional arc on the Airy ellipsoid (Bowring series in the third
/// flattening `n`).
fn meridional_arc(lat: f64, lat0: f64, b: f64, n: f64) -> f64 {
    let dlat = lat - lat0;
    let slat = lat + lat0;
    let m1 = (1.0 + n + 1.25 * n * n + 1.25 * n * n * n) * dlat;
    let m2 = (3.0 * n + 3.0 * n * n + 2.625 * n * n * n) * dlat.sin() * slat.cos();
    let m3 = (1.875 * n * n + 1.875 * n * n * n) * (2.0 * dlat).sin() * (2.0 * slat).cos();
    let m4 = (35.0 / 24.0) * n * n * n * (3.0 * dlat).sin() * (3.0 * slat).cos();
    b * SCALE_F0 * (m1 - m2 + m3 - m4)
}
