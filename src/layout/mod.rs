//! Label layout: breaking text into lines and placing every field on the page.
//!
//! Layout happens in label space: points, with the origin at the top-left corner of
//! the page and y growing downward. Nothing in here touches PDF internals; the output
//! is a list of [`DrawOp`]s that a [`LabelSink`](crate::LabelSink) paints.
//!
//! # Example
//!
//! ```
//! use label_gen::layout::{position_fields, DrawOp};
//! use label_gen::{LabelFields, LabelVariant, StandardLabel};
//!
//! let fields = LabelFields {
//!     title: "Sample Product".to_string(),
//!     description: "Short text.".to_string(),
//!     variant: LabelVariant::Standard(StandardLabel {
//!         price: "$19.99".to_string(),
//!         sku: "SKU123456".to_string(),
//!         barcode: "1234567890123".to_string(),
//!     }),
//! };
//!
//! let ops = position_fields(&fields, &fields.kind().geometry());
//! assert!(matches!(ops.last(), Some(DrawOp::Border { .. })));
//! ```

mod position;
mod wrap;

pub use position::*;
pub use wrap::*;
