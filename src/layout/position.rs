use super::wrap::wrap;
use crate::font::BuiltinFont;
use crate::geometry::PageGeometry;
use crate::label::{EquipmentTagLabel, LabelFields, LabelVariant, StandardLabel};
use crate::rect::Rect;
use crate::units::*;
use log::debug;

fn inch(value: f32) -> Pt {
    In(value).into()
}

const DESCRIPTION_SIZE: Pt = Pt(10.0);
const QR_CAPTION: &str = "Finalize Restock";

/// A line of text placed in label space. `(x, y)` is the top-left corner of a cell
/// `cell_height` tall that the text is vertically centred in.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub cell_height: Pt,
    pub font: BuiltinFont,
    pub size: Pt,
}

impl TextRun {
    pub fn width(&self) -> Pt {
        self.font.width_of(&self.text, self.size)
    }

    /// The x coordinate where the text ends
    pub fn right(&self) -> Pt {
        self.x + self.width()
    }

    /// Where the baseline of the text sits, in label space
    pub fn baseline(&self) -> Pt {
        self.y + self.cell_height / 2.0 + self.size * 0.3
    }
}

/// Where a QR code goes, and the caption drawn above it once the code exists
#[derive(Debug, Clone, PartialEq)]
pub struct QrPlacement {
    pub url: String,
    pub area: Rect,
    pub caption: TextRun,
}

/// A single absolute-position drawing instruction, in label space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Border { rect: Rect, line_width: Pt },
    QrCode(QrPlacement),
}

#[derive(Copy, Clone)]
enum Align {
    Left,
    Center,
    Right,
}

/// Place `text` on a row at `y`, aligned within the content box
fn aligned(
    geometry: &PageGeometry,
    text: String,
    font: BuiltinFont,
    size: Pt,
    align: Align,
    y: Pt,
    cell_height: Pt,
) -> TextRun {
    let width = font.width_of(&text, size);
    let x = match align {
        Align::Left => geometry.margin,
        Align::Center => geometry.margin + (geometry.content_width() - width) / 2.0,
        Align::Right => geometry.right() - width,
    };
    TextRun {
        text,
        x,
        y,
        cell_height,
        font,
        size,
    }
}

/// Map a label onto fixed-position drawing instructions: title, wrapped description,
/// the bottom fields of the variant and a border around the content box.
///
/// Fields are placed by fixed offsets from the margins. Nothing checks that fields do
/// not collide; the offsets are chosen so that typical field lengths don't.
pub fn position_fields(fields: &LabelFields, geometry: &PageGeometry) -> Vec<DrawOp> {
    let mut ops: Vec<DrawOp> = Vec::new();

    let (title_size, title_cell, description_reserve) = match fields.variant {
        LabelVariant::Standard(_) => (Pt(24.0), inch(0.4), inch(1.0)),
        LabelVariant::EquipmentTag(_) => (Pt(48.0), inch(0.3), inch(1.5)),
    };

    ops.push(DrawOp::Text(aligned(
        geometry,
        fields.display_title(),
        BuiltinFont::CourierBold,
        title_size,
        Align::Center,
        geometry.margin + inch(0.1),
        title_cell,
    )));

    let max_y = geometry.bottom() - description_reserve;
    let description_start = ops.len();
    ops.extend(
        wrap(
            &fields.description,
            geometry.content_width() - inch(0.1),
            geometry.margin + inch(0.625),
            inch(0.25),
            max_y,
            |s: &str| BuiltinFont::Courier.width_of(s, DESCRIPTION_SIZE),
        )
        .map(|line| {
            DrawOp::Text(TextRun {
                text: line.text,
                x: geometry.margin,
                y: line.y,
                cell_height: inch(0.2),
                font: BuiltinFont::Courier,
                size: DESCRIPTION_SIZE,
            })
        }),
    );
    debug!(
        "description laid out in {} line(s)",
        ops.len() - description_start
    );

    match &fields.variant {
        LabelVariant::Standard(label) => position_standard(&mut ops, label, geometry),
        LabelVariant::EquipmentTag(label) => {
            position_equipment_tag(&mut ops, label, fields.variant.qr_url(), geometry)
        }
    }

    ops.push(DrawOp::Border {
        rect: geometry.content_box(),
        line_width: inch(0.01),
    });

    ops
}

/// Price on the left, SKU in the middle and barcode on the right of one bottom row
fn position_standard(ops: &mut Vec<DrawOp>, label: &StandardLabel, geometry: &PageGeometry) {
    let bottom_y = geometry.bottom() - inch(0.6);
    let cell = inch(0.3);

    ops.push(DrawOp::Text(aligned(
        geometry,
        label.price.clone(),
        BuiltinFont::CourierBold,
        Pt(14.0),
        Align::Left,
        bottom_y,
        cell,
    )));
    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("SKU: {}", label.sku),
        BuiltinFont::CourierBold,
        Pt(10.0),
        Align::Center,
        bottom_y,
        cell,
    )));
    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("BC: {}", label.barcode),
        BuiltinFont::CourierBold,
        Pt(8.0),
        Align::Right,
        bottom_y,
        cell,
    )));
}

/// Barcode, SKU and return date along the bottom, borrow details above them on the
/// left and the QR code in the bottom-right corner
fn position_equipment_tag(
    ops: &mut Vec<DrawOp>,
    label: &EquipmentTagLabel,
    qr_url: Option<&str>,
    geometry: &PageGeometry,
) {
    let bottom_y = geometry.bottom() - inch(0.6);
    let cell = inch(0.3);

    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("BC: {}", label.barcode),
        BuiltinFont::CourierBold,
        Pt(9.0),
        Align::Right,
        bottom_y - inch(0.35),
        cell,
    )));
    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("SKU: {}", label.sku),
        BuiltinFont::CourierBold,
        Pt(11.0),
        Align::Center,
        bottom_y,
        cell,
    )));
    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("Return By: {}", label.return_date),
        BuiltinFont::CourierBold,
        Pt(14.0),
        Align::Right,
        bottom_y,
        cell,
    )));

    let qr_size = inch(0.5);
    let qr_y = geometry.bottom() - qr_size;

    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("Borrowed: {}", label.checkout_date),
        BuiltinFont::CourierBold,
        Pt(14.0),
        Align::Left,
        qr_y - inch(0.8),
        cell,
    )));
    ops.push(DrawOp::Text(aligned(
        geometry,
        format!("Return To: {}", label.return_location),
        BuiltinFont::CourierBold,
        Pt(14.0),
        Align::Left,
        qr_y - inch(0.5),
        cell,
    )));

    let Some(url) = qr_url else {
        return;
    };

    let qr_x = geometry.right() - qr_size;
    let caption_size = Pt(8.0);
    let caption_width = BuiltinFont::CourierBold.width_of(QR_CAPTION, caption_size);
    ops.push(DrawOp::QrCode(QrPlacement {
        url: url.to_string(),
        area: Rect::from_xywh(qr_x, qr_y, qr_size, qr_size),
        caption: TextRun {
            text: QR_CAPTION.to_string(),
            x: qr_x + (qr_size - caption_width) / 2.0,
            y: qr_y - inch(0.15),
            cell_height: inch(0.1),
            font: BuiltinFont::CourierBold,
            size: caption_size,
        },
    }));
}
