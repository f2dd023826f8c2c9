use crate::{
    info::Info,
    label::LabelFields,
    layout::{position_fields, DrawOp, QrPlacement, TextRun},
    qr::{render_qr, QR_PIXELS},
    sink::{LabelSink, PdfSink},
    units::Pt,
    LabelError,
};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Draw `run`, returning whether it stayed left of `right_edge`. Runs that don't are
/// still drawn in full.
fn draw_run<S: LabelSink>(sink: &mut S, run: &TextRun, right_edge: Pt) -> bool {
    sink.set_font(run.font, run.size);
    sink.draw_text_at(run.x, run.baseline(), &run.text);
    let fits = run.x + sink.measure_width(&run.text) <= right_edge;
    if !fits {
        debug!("{:?} runs past the right margin", run.text);
    }
    fits
}

/// A QR code that cannot be made leaves its corner empty; the label is still produced.
/// The rendered file is removed when this returns.
fn draw_qr<S: LabelSink>(sink: &mut S, qr: &QrPlacement, right_edge: Pt) {
    let image = match render_qr(&qr.url, QR_PIXELS) {
        Ok(image) => image,
        Err(e) => {
            warn!("skipping QR code for {:?}: {e}", qr.url);
            return;
        }
    };
    if let Err(e) = sink.draw_image(image.path(), qr.area) {
        warn!("could not embed QR code: {e}");
        return;
    }
    draw_run(sink, &qr.caption, right_edge);
}

/// Validate `fields`, lay them out and paint them onto `sink`. Nothing is drawn when
/// validation fails.
pub fn paint_label<S: LabelSink>(fields: &LabelFields, sink: &mut S) -> Result<(), LabelError> {
    fields.validate()?;

    let geometry = fields.kind().geometry();
    let ops = position_fields(fields, &geometry);

    sink.add_page(&geometry);
    for op in ops.iter() {
        match op {
            DrawOp::Text(run) => {
                draw_run(sink, run, geometry.right());
            }
            DrawOp::Border { rect, line_width } => sink.draw_rect(*rect, *line_width),
            DrawOp::QrCode(qr) => draw_qr(sink, qr, geometry.right()),
        }
    }
    Ok(())
}

/// Document metadata for a label
pub fn label_info(fields: &LabelFields) -> Info {
    let mut info = Info::new();
    info.title(fields.display_title())
        .subject(&fields.description)
        .keywords(fields.variant.sku());
    info
}

/// Render `fields` to `label_<sku>.pdf` inside `out_dir`, returning the absolute path
/// of the written file
pub fn generate_pdf(fields: &LabelFields, out_dir: &Path) -> Result<PathBuf, LabelError> {
    let mut sink = PdfSink::new(label_info(fields));
    paint_label(fields, &mut sink)?;

    let path = out_dir.join(fields.filename());
    sink.save(&path)?;

    let path = path.canonicalize().unwrap_or(path);
    info!("wrote label to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFont;
    use crate::geometry::PageGeometry;
    use crate::label::{EquipmentTagLabel, LabelVariant, StandardLabel};
    use crate::rect::Rect;

    #[derive(Debug, PartialEq)]
    enum Call {
        Page,
        Text(String),
        Rect,
        Image(bool),
    }

    /// Records what was drawn. Images are checked for existence at the moment they
    /// are drawn.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Call>,
        font: Option<(BuiltinFont, Pt)>,
        image_paths: Vec<PathBuf>,
        fail_images: bool,
    }

    impl LabelSink for RecordingSink {
        fn add_page(&mut self, _geometry: &PageGeometry) {
            self.calls.push(Call::Page);
        }

        fn set_font(&mut self, font: BuiltinFont, size: Pt) {
            self.font = Some((font, size));
        }

        fn measure_width(&self, text: &str) -> Pt {
            let (font, size) = self.font.unwrap_or((BuiltinFont::Courier, Pt(10.0)));
            font.width_of(text, size)
        }

        fn draw_text_at(&mut self, _x: Pt, _baseline_y: Pt, text: &str) {
            self.calls.push(Call::Text(text.to_string()));
        }

        fn draw_rect(&mut self, _rect: Rect, _line_width: Pt) {
            self.calls.push(Call::Rect);
        }

        fn draw_image(&mut self, path: &Path, _area: Rect) -> Result<(), LabelError> {
            self.calls.push(Call::Image(path.exists()));
            self.image_paths.push(path.to_path_buf());
            if self.fail_images {
                return Err(LabelError::PageMissing);
            }
            Ok(())
        }

        fn save(self, _path: &Path) -> Result<(), LabelError> {
            Ok(())
        }
    }

    fn equipment(url: &str) -> LabelFields {
        LabelFields {
            title: "Sample Equipment Tag".into(),
            description: "Short text.".into(),
            variant: LabelVariant::EquipmentTag(EquipmentTagLabel {
                return_location: "Engineering Hall 317".into(),
                sku: "SKU123456".into(),
                barcode: "1234567890123".into(),
                checkout_date: "01/15/2024".into(),
                return_date: "01/22/2024".into(),
                url: url.into(),
            }),
        }
    }

    #[test]
    fn blank_titles_draw_nothing() {
        let mut fields = equipment("https://example.com/product1");
        fields.title = "   ".into();
        let mut sink = RecordingSink::default();
        assert!(matches!(
            paint_label(&fields, &mut sink),
            Err(LabelError::TitleRequired)
        ));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn page_first_and_border_last() {
        let mut sink = RecordingSink::default();
        paint_label(&equipment(""), &mut sink).expect("can paint");
        assert_eq!(sink.calls.first(), Some(&Call::Page));
        assert_eq!(sink.calls.last(), Some(&Call::Rect));
        assert!(sink.calls.contains(&Call::Text("Short text.".into())));
    }

    #[test]
    fn empty_urls_embed_no_image() {
        let mut sink = RecordingSink::default();
        paint_label(&equipment(""), &mut sink).expect("can paint");
        assert!(!sink.calls.iter().any(|c| matches!(c, Call::Image(_))));
        assert!(!sink.calls.contains(&Call::Text("Finalize Restock".into())));
    }

    #[test]
    fn qr_image_exists_while_drawn_and_is_removed_after() {
        let mut sink = RecordingSink::default();
        paint_label(&equipment("https://example.com/product1"), &mut sink).expect("can paint");

        let image_at = sink
            .calls
            .iter()
            .position(|c| *c == Call::Image(true))
            .expect("qr image drawn from an existing file");
        assert_eq!(
            sink.calls.get(image_at + 1),
            Some(&Call::Text("Finalize Restock".into()))
        );
        assert_eq!(sink.image_paths.len(), 1);
        assert!(!sink.image_paths[0].exists());
    }

    #[test]
    fn failed_embeds_skip_the_caption_and_clean_up() {
        let mut sink = RecordingSink {
            fail_images: true,
            ..Default::default()
        };
        paint_label(&equipment("https://example.com/product1"), &mut sink).expect("can paint");
        assert!(!sink.calls.contains(&Call::Text("Finalize Restock".into())));
        assert_eq!(sink.calls.last(), Some(&Call::Rect));
        assert!(!sink.image_paths[0].exists());
    }

    #[test]
    fn runs_past_the_margin_are_reported() {
        let mut sink = RecordingSink::default();
        let run = TextRun {
            text: "BC: 12345678901234567890".into(),
            x: Pt(100.0),
            y: Pt(0.0),
            cell_height: Pt(10.0),
            font: BuiltinFont::CourierBold,
            size: Pt(14.0),
        };
        // 24 chars at 8.4pt each end at 301.6pt
        assert!(!draw_run(&mut sink, &run, Pt(300.0)));
        assert!(draw_run(&mut sink, &run, Pt(302.0)));
        assert_eq!(
            sink.calls,
            vec![Call::Text(run.text.clone()), Call::Text(run.text.clone())]
        );
    }

    #[test]
    fn info_carries_title_and_sku() {
        let mut fields = equipment("");
        fields.title = "sample equipment tag".into();
        let info = label_info(&fields);
        assert_eq!(info.title.as_deref(), Some("Sample Equipment Tag"));
        assert_eq!(info.subject.as_deref(), Some("Short text."));
        assert_eq!(info.keywords.as_deref(), Some("SKU123456"));
    }

    #[test]
    fn writes_the_pdf_into_the_output_directory() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let fields = LabelFields {
            title: "Sample Product".into(),
            description: lipsum::lipsum(60),
            variant: LabelVariant::Standard(StandardLabel {
                price: "$19.99".into(),
                sku: "SKU 123".into(),
                barcode: "1234567890123".into(),
            }),
        };

        let path = generate_pdf(&fields, dir.path()).expect("can generate");
        assert!(path.is_absolute());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("label_SKU_123.pdf"));
        let bytes = std::fs::read(&path).expect("can read pdf");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn failed_validation_writes_no_file() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let mut fields = equipment("");
        fields.title = String::new();
        assert!(generate_pdf(&fields, dir.path()).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).expect("can list").count(), 0);
    }
}
