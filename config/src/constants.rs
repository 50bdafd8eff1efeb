//! # Configuration Constants
//!
//! Centralized constants for the scenegen pipeline. Geometry tolerances,
//! tessellation minimums, and serialization precision are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum counts for parametric shapes
//! - **Serialization**: Text output precision

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Area threshold below which a triangle counts as degenerate.
///
/// Slightly larger tolerance than [`EPSILON`], used by mesh validation to
/// reject zero-area triangles produced by coincident or collinear vertices.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of segments for any parametric shape.
///
/// A closed curve or ring needs at least 3 samples to enclose any area;
/// fewer produce degenerate geometry and are rejected at generation time.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 2u32;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// SERIALIZATION CONSTANTS
// =============================================================================

/// Number of decimal places for vertex positions in OBJ output.
///
/// All position lines are formatted with this fixed precision so that
/// regenerating a mesh with identical parameters yields byte-identical
/// files.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_POSITION_DECIMALS;
///
/// let line = format!("v {:.prec$} 0.0 0.0", 1.5, prec = OBJ_POSITION_DECIMALS);
/// assert_eq!(line, "v 1.500000 0.0 0.0");
/// ```
pub const OBJ_POSITION_DECIMALS: usize = 6;
