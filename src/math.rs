//! Mathematical utilities for the subsolar simulation.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;
pub const TAU: f64 = core::f64::consts::TAU;
pub const FRAC_PI_2: f64 = core::f64::consts::FRAC_PI_2;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an azimuthal angle in radians to the range [0, 2π).
///
/// Values already inside the range are returned unchanged, so the function is idempotent.
pub fn normalize_radians_0_to_tau(radians: f64) -> f64 {
    let normalized = radians % TAU;
    let normalized = if normalized < 0.0 {
        normalized + TAU
    } else {
        normalized
    };
    // -ε + 2π can round up to exactly 2π
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes x^n for integer n.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}

/// acos with its argument clamped to [-1, 1].
///
/// Rounding near the tropics and poles can push the argument a few ulps outside
/// the domain; clamping keeps the result finite. NaN input still yields NaN.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    acos(x.clamp(-1.0, 1.0))
}
