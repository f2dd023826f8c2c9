//! Generates single-page 4x6 inch PDF labels: product labels and equipment tags with
//! a word-wrapped description, fixed-position fields and an optional QR code.
//!
//! ```no_run
//! use label_gen::{LabelForm, LabelKind};
//!
//! let mut form = LabelForm::new(LabelKind::EquipmentTag);
//! let notice = form.generate(std::path::Path::new("."));
//! println!("{}", form.status());
//! # let _ = notice;
//! ```

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod form;
pub use form::*;

mod generate;
pub use generate::*;

mod geometry;
pub use geometry::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod label;
pub use label::*;

/// Word wrapping and field placement, in label space
pub mod layout;

mod page;
pub use page::*;

/// Standard page sizes
pub mod pagesize;

mod qr;
pub use qr::*;

mod rect;
pub use rect::*;

pub(crate) mod content;
pub(crate) mod refs;

mod sink;
pub use sink::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
