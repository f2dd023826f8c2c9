use crate::{
    font::BuiltinFont,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    LabelError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]. Label documents
/// always hold exactly one page.
pub struct Document {
    pub info: Option<Info>,
    pub page: Option<Page>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Set the page of the document, replacing any page that was set before
    pub fn set_page(&mut self, page: Page) {
        self.page = Some(page);
    }

    /// Add an image to the document structure. The returned value is the id used to
    /// place the image on the page.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. The document is rendered in memory
    /// first, then written out in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), LabelError> {
        let Document { info, page, images } = self;
        let page = page.ok_or(LabelError::PageMissing)?;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        for font in BuiltinFont::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        let page_ref = page.write(&mut refs, page_tree_id, &images, &mut writer)?;
        writer.pages(page_tree_id).count(1).kids([page_ref]);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Orientation, PageGeometry};
    use crate::pagesize::LABEL_4X6;
    use crate::units::In;

    #[test]
    fn documents_without_a_page_cannot_be_written() {
        let doc = Document::default();
        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(doc.write(&mut out), Err(LabelError::PageMissing)));
        assert!(out.is_empty());
    }

    #[test]
    fn writes_a_single_page_pdf() {
        let geometry = PageGeometry::new(LABEL_4X6, Orientation::Portrait, In(0.25).into());
        let mut doc = Document::default();
        doc.set_info(Info::new().title("Sample Product").clone());
        doc.set_page(Page::new(&geometry));

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).expect("can write document");
        assert!(out.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Courier-Bold"));
        assert!(text.contains("Sample Product"));
    }
}
