//! The label data model: what a user typed in, and which kind of label it is for.

use crate::geometry::{Orientation, PageGeometry};
use crate::pagesize::LABEL_4X6;
use crate::units::In;
use crate::LabelError;

/// Fields of a shelf / product label
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StandardLabel {
    pub price: String,
    pub sku: String,
    pub barcode: String,
}

/// Fields of a tag attached to lent-out equipment
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EquipmentTagLabel {
    pub return_location: String,
    pub sku: String,
    pub barcode: String,
    pub checkout_date: String,
    pub return_date: String,
    /// Encoded into a QR code when not blank
    pub url: String,
}

/// The variant-specific part of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelVariant {
    Standard(StandardLabel),
    EquipmentTag(EquipmentTagLabel),
}

/// Which kind of label is being made, without any of its data
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Portrait product label: price, SKU and barcode along the bottom
    Standard,
    /// Landscape equipment tag: borrow / return details and an optional QR code
    EquipmentTag,
}

/// How the title is transformed before it is drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TitleStyle {
    Verbatim,
    /// First letter of every word upper case, the rest lower case
    TitleCase,
}

impl LabelKind {
    /// The page geometry labels of this kind are printed on
    pub fn geometry(&self) -> PageGeometry {
        match self {
            LabelKind::Standard => {
                PageGeometry::new(LABEL_4X6, Orientation::Portrait, In(0.25).into())
            }
            LabelKind::EquipmentTag => {
                PageGeometry::new(LABEL_4X6, Orientation::Landscape, In(0.125).into())
            }
        }
    }

    pub fn title_style(&self) -> TitleStyle {
        match self {
            LabelKind::Standard => TitleStyle::Verbatim,
            LabelKind::EquipmentTag => TitleStyle::TitleCase,
        }
    }

    /// Whether labels of this kind can carry a QR code
    pub fn has_qr(&self) -> bool {
        matches!(self, LabelKind::EquipmentTag)
    }
}

impl LabelVariant {
    pub fn kind(&self) -> LabelKind {
        match self {
            LabelVariant::Standard(_) => LabelKind::Standard,
            LabelVariant::EquipmentTag(_) => LabelKind::EquipmentTag,
        }
    }

    pub fn sku(&self) -> &str {
        match self {
            LabelVariant::Standard(label) => &label.sku,
            LabelVariant::EquipmentTag(label) => &label.sku,
        }
    }

    /// The URL to encode as a QR code, if this variant has one and it is not blank
    pub fn qr_url(&self) -> Option<&str> {
        if !self.kind().has_qr() {
            return None;
        }
        let url = match self {
            LabelVariant::EquipmentTag(label) => label.url.as_str(),
            LabelVariant::Standard(_) => return None,
        };
        (!url.trim().is_empty()).then_some(url)
    }
}

/// An immutable snapshot of everything needed to lay out one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFields {
    pub title: String,
    pub description: String,
    pub variant: LabelVariant,
}

impl LabelFields {
    pub fn kind(&self) -> LabelKind {
        self.variant.kind()
    }

    /// The only check made before drawing: the title must not be blank
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.title.trim().is_empty() {
            return Err(LabelError::TitleRequired);
        }
        Ok(())
    }

    /// The title as it should appear on the label
    pub fn display_title(&self) -> String {
        match self.kind().title_style() {
            TitleStyle::Verbatim => self.title.clone(),
            TitleStyle::TitleCase => title_case(&self.title),
        }
    }

    /// The file name the label is saved under
    pub fn filename(&self) -> String {
        label_filename(self.variant.sku())
    }
}

/// Upper-case the first letter of every whitespace-separated word and lower-case the
/// rest, joining the words with single spaces
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `label_<sku>.pdf`, with spaces in the SKU replaced by underscores
pub fn label_filename(sku: &str) -> String {
    format!("label_{}.pdf", sku.replace(' ', "_"))
}
