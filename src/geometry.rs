use crate::pagesize::{PageOrientation, PageSize};
use crate::rect::Rect;
use crate::units::*;

/// Which way up the label stock is fed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// The printable geometry of a label: page size, a uniform margin and the orientation
/// the size was derived with. Geometries are compiled-in constants, never user input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margin: Pt,
    pub orientation: Orientation,
}

impl PageGeometry {
    /// Orient `size` and apply `margin` on every edge
    pub fn new(size: PageSize, orientation: Orientation, margin: Pt) -> PageGeometry {
        let (width, height) = match orientation {
            Orientation::Portrait => size.portrait(),
            Orientation::Landscape => size.landscape(),
        };
        debug_assert!(
            margin < width.min(height) / 2.0,
            "margin must leave a positive content area"
        );
        PageGeometry {
            width,
            height,
            margin,
            orientation,
        }
    }

    pub fn content_width(&self) -> Pt {
        self.width - self.margin * 2.0
    }

    pub fn content_height(&self) -> Pt {
        self.height - self.margin * 2.0
    }

    /// The area inside the margins, in label space
    pub fn content_box(&self) -> Rect {
        Rect::from_xywh(
            self.margin,
            self.margin,
            self.content_width(),
            self.content_height(),
        )
    }

    /// The x coordinate of the right margin
    pub fn right(&self) -> Pt {
        self.width - self.margin
    }

    /// The y coordinate of the bottom margin, in label space
    pub fn bottom(&self) -> Pt {
        self.height - self.margin
    }
}
