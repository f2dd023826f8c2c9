//! Physical label sizes.
//!
//! Sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape.
//!
//! ```
//! use label_gen::pagesize::{PageOrientation, LABEL_4X6};
//! use label_gen::Pt;
//!
//! let (width, height) = LABEL_4X6.landscape();
//! assert_eq!(width, Pt(432.0));
//! assert_eq!(height, Pt(288.0));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// The 4×6 inch shipping / shelf label stock
pub const LABEL_4X6: PageSize = (Pt(4.0 * INCH), Pt(6.0 * INCH));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
