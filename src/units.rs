use derive_more::{Add, AddAssign, Deref, Display, From, Into, Neg, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, MulAssign};

/// Points per inch
pub const INCH: f32 = 72.0;

/// PDF points (1/72 of an inch). All layout and rendering happens in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Neg,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// Inches, mostly used to spell out physical label dimensions
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From)]
pub struct In(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl MulAssign<f32> for Pt {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * INCH)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / INCH)
    }
}

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(0.25).into();
        assert_eq!(pt, Pt(18.0));
        let back: In = Pt(432.0).into();
        assert_eq!(back, In(6.0));
    }

    #[test]
    fn points_support_arithmetic() {
        let mut p = Pt(10.0) + Pt(2.0) - Pt(4.0);
        p *= 2.0;
        assert_eq!(p, Pt(16.0));
        assert_eq!(p / 4.0, Pt(4.0));
        assert_eq!(-p, Pt(-16.0));
        assert!(Pt(1.0) < Pt(1.5));
        let total: Pt = [Pt(1.0), Pt(2.0)].into_iter().sum();
        assert_eq!(total, Pt(3.0));
    }
}
