#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Scalar alias and elementary functions on dimensionless quantities.
pub mod math;
/// Continued-fraction approximation of real exponents.
pub mod rational;
/// Base dimensions and unit exponent vectors.
pub mod dimension;
/// Values with units and propagated uncertainty.
pub mod quantity;
/// SI base quantities, derived units and scale factors.
pub mod units;
/// Human-readable names for common derived units.
pub mod display;
/// Engineering-notation rendering of quantities.
pub mod format;
/// Physical constants expressed as quantities.
pub mod constants;
/// Mean and linear regression with uncertainty.
pub mod stats;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
