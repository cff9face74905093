//! Thin adapters turning ledger and chart data into text or SVG.

pub mod svg;
pub mod text;

pub use svg::render_svg;
