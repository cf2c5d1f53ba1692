//! wrksht-pdf
//!
//! Fixed-layout worksheet rendering: a cursor-based drawing canvas, the
//! text formatting helpers, one renderer per quote section and the
//! orchestrator that turns a quote into PDF bytes.

pub mod asset;
pub mod canvas;
pub mod error;
pub mod fonts;
pub mod format;
pub mod image;
pub mod sections;
pub mod sink;
pub mod styles;
pub mod worksheet;
mod writer;
