use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// Glyph advance of every Courier glyph, in 1/1000 em
const COURIER_ADVANCE: f32 = 600.0;

/// The fonts labels are set in. Both are members of the PDF standard 14 and are never
/// embedded; every viewer supplies them. Both faces are monospaced with identical
/// metrics, so widths can be computed without parsing any font data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Courier,
    CourierBold,
}

impl BuiltinFont {
    /// Every font the document writer registers, in resource order
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Courier, BuiltinFont::CourierBold];

    /// The PostScript name of the font
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
        }
    }

    /// The resource index used to refer to this font from content streams (`/F{index}`)
    pub fn index(&self) -> usize {
        match self {
            BuiltinFont::Courier => 0,
            BuiltinFont::CourierBold => 1,
        }
    }

    /// Calculate the width of a given string of text at the given font size. Every
    /// character, including ones that will be rendered as a replacement, occupies one
    /// glyph advance.
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        Pt(*size * text.chars().count() as f32 * COURIER_ADVANCE / 1000.0)
    }

    /// Encode text as a WinAnsi byte string. Characters outside Latin-1 have no code in the
    /// encoding and are replaced with `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| match u32::from(ch) {
                0x20..=0x7e | 0xa0..=0xff => ch as u8,
                _ => b'?',
            })
            .collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}
