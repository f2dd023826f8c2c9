use crate::{
    font::BuiltinFont,
    geometry::PageGeometry,
    image::Image,
    info::Info,
    page::{ImageLayout, Page, SpanFont, SpanLayout, StrokeLayout},
    rect::Rect,
    units::*,
    Document, LabelError,
};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Something a positioned label can be painted onto.
///
/// All coordinates are in label space: points from the top-left corner of the page,
/// with y growing downward.
pub trait LabelSink {
    /// Start the (single) page the label is drawn on
    fn add_page(&mut self, geometry: &PageGeometry);

    /// Select the font used by subsequent text
    fn set_font(&mut self, font: BuiltinFont, size: Pt);

    /// Width of `text` in the current font
    fn measure_width(&self, text: &str) -> Pt;

    /// Draw `text` in the current font with its baseline starting at `(x, baseline_y)`
    fn draw_text_at(&mut self, x: Pt, baseline_y: Pt, text: &str);

    /// Stroke the outline of `rect`
    fn draw_rect(&mut self, rect: Rect, line_width: Pt);

    /// Embed the image file at `path`, stretched to fill `area`
    fn draw_image(&mut self, path: &Path, area: Rect) -> Result<(), LabelError>;

    /// Write the finished label to `path`
    fn save(self, path: &Path) -> Result<(), LabelError>
    where
        Self: Sized;
}

/// Paints labels into a single-page PDF [Document]
pub struct PdfSink {
    document: Document,
    page: Option<Page>,
    font: SpanFont,
}

impl PdfSink {
    pub fn new(info: Info) -> PdfSink {
        let mut document = Document::default();
        document.set_info(info);
        PdfSink {
            document,
            page: None,
            font: SpanFont {
                font: BuiltinFont::Courier,
                size: Pt(10.0),
            },
        }
    }

    fn page_mut(&mut self) -> Option<&mut Page> {
        if self.page.is_none() {
            warn!("drawing before a page was added, ignoring");
        }
        self.page.as_mut()
    }

    /// Write the finished PDF into `w` rather than a file
    pub fn write<W: std::io::Write>(mut self, w: W) -> Result<(), LabelError> {
        if let Some(page) = self.page.take() {
            self.document.set_page(page);
        }
        self.document.write(w)
    }
}

impl LabelSink for PdfSink {
    fn add_page(&mut self, geometry: &PageGeometry) {
        if self.page.is_some() {
            warn!("label already has a page, replacing it");
        }
        self.page = Some(Page::new(geometry));
    }

    fn set_font(&mut self, font: BuiltinFont, size: Pt) {
        self.font = SpanFont { font, size };
    }

    fn measure_width(&self, text: &str) -> Pt {
        self.font.font.width_of(text, self.font.size)
    }

    fn draw_text_at(&mut self, x: Pt, baseline_y: Pt, text: &str) {
        let font = self.font;
        if let Some(page) = self.page_mut() {
            let y = page.height() - baseline_y;
            page.add_span(SpanLayout {
                text: text.to_string(),
                font,
                coords: (x, y),
            });
        }
    }

    fn draw_rect(&mut self, rect: Rect, line_width: Pt) {
        if let Some(page) = self.page_mut() {
            let rect = rect.flip_y(page.height());
            page.add_stroke(StrokeLayout { rect, line_width });
        }
    }

    fn draw_image(&mut self, path: &Path, area: Rect) -> Result<(), LabelError> {
        let Some(page_height) = self.page.as_ref().map(Page::height) else {
            return Err(LabelError::PageMissing);
        };
        let image = Image::new_from_disk(path)?;
        debug!(
            "embedding {}x{} image from {}",
            image.width,
            image.height,
            path.display()
        );
        let image_id = self.document.add_image(image);
        if let Some(page) = self.page.as_mut() {
            page.add_image(ImageLayout {
                image_id,
                position: area.flip_y(page_height),
            });
        }
        Ok(())
    }

    fn save(self, path: &Path) -> Result<(), LabelError> {
        let file = File::create(path).map_err(LabelError::Save)?;
        let mut w = BufWriter::new(file);
        self.write(&mut w).map_err(|e| match e {
            LabelError::Io(e) => LabelError::Save(e),
            e => e,
        })?;
        // dropping a BufWriter swallows the error of its final write
        w.flush().map_err(LabelError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use crate::page::PageContents;
    use crate::pagesize::LABEL_4X6;

    fn sink() -> PdfSink {
        let mut sink = PdfSink::new(Info::new());
        sink.add_page(&PageGeometry::new(
            LABEL_4X6,
            Orientation::Landscape,
            In(0.125).into(),
        ));
        sink
    }

    #[test]
    fn text_is_flipped_into_pdf_space() {
        let mut sink = sink();
        sink.set_font(BuiltinFont::CourierBold, Pt(14.0));
        assert_eq!(sink.measure_width("abcde"), Pt(42.0));
        sink.draw_text_at(Pt(9.0), Pt(100.0), "hello");

        let page = sink.page.as_ref().expect("page was added");
        assert_eq!(
            page.contents,
            vec![PageContents::Text(SpanLayout {
                text: "hello".into(),
                font: SpanFont {
                    font: BuiltinFont::CourierBold,
                    size: Pt(14.0),
                },
                coords: (Pt(9.0), Pt(188.0)),
            })]
        );
    }

    #[test]
    fn rects_are_flipped_into_pdf_space() {
        let mut sink = sink();
        sink.draw_rect(
            Rect::from_xywh(Pt(9.0), Pt(9.0), Pt(414.0), Pt(270.0)),
            Pt(0.72),
        );
        let page = sink.page.as_ref().expect("page was added");
        let PageContents::Stroke(stroke) = &page.contents[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(stroke.rect.y1, Pt(9.0));
        assert_eq!(stroke.rect.y2, Pt(279.0));
        assert_eq!(stroke.line_width, Pt(0.72));
    }

    #[test]
    fn missing_images_are_errors() {
        let mut sink = sink();
        let result = sink.draw_image(
            Path::new("/definitely/not/here.png"),
            Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(36.0), Pt(36.0)),
        );
        assert!(matches!(result, Err(LabelError::Io(_))));
        assert!(sink.document.images.iter().next().is_none());
    }

    #[test]
    fn drawing_without_a_page_is_ignored() {
        let mut sink = PdfSink::new(Info::new());
        sink.draw_text_at(Pt(0.0), Pt(0.0), "lost");
        assert!(sink.page.is_none());
        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(sink.write(&mut out), Err(LabelError::PageMissing)));
    }

    #[test]
    fn saving_into_a_missing_directory_is_a_save_error() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("missing").join("label.pdf");
        assert!(matches!(sink().save(&path), Err(LabelError::Save(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_disk_is_a_save_error() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("label_x.pdf");
        std::os::unix::fs::symlink("/dev/full", &path).expect("can link to /dev/full");

        // small enough to sit in the write buffer until the final flush
        let mut sink = sink();
        sink.set_font(BuiltinFont::Courier, Pt(10.0));
        sink.draw_text_at(Pt(9.0), Pt(20.0), "x");
        assert!(matches!(sink.save(&path), Err(LabelError::Save(_))));
    }
}
