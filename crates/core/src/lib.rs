//! Design token extraction for DesignDNA.
//!
//! ```text
//!   capture.json ─┐
//!   styles.css   ─┼─▶ Document ──▶ extract ──▶ StyleSnapshot
//!   live DOM     ─┘
//! ```

pub mod extract;
pub mod model;
pub mod parsers;
pub mod units;

pub use extract::{extract, extract_at};
