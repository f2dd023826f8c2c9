use crate::units::*;

/// A rectangle, specified by two opposite corners.
///
/// Layout code works in label space (origin top-left, y growing downward), where
/// `(x1, y1)` is the top-left corner. Page contents are stored in PDF space (origin
/// bottom-left), where `(x1, y1)` is the lower-left corner; use [Rect::flip_y] to
/// move between the two.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its first corner and its size
    pub fn from_xywh(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Mirror the rectangle vertically within a page of the given height, keeping
    /// `(x1, y1)` as the corner closest to the new origin
    pub fn flip_y(&self, page_height: Pt) -> Rect {
        Rect {
            x1: self.x1,
            y1: page_height - self.y2,
            x2: self.x2,
            y2: page_height - self.y1,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        pdf_writer::Rect::from(*r)
    }
}
