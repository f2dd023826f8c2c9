use crate::content::render_contents;
use crate::font::BuiltinFont;
use crate::geometry::PageGeometry;
use crate::image::Image;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A run of text placed with its baseline starting at `coords`, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

/// An image drawn to fill `position`, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A rectangle outline, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub struct StrokeLayout {
    pub rect: Rect,
    pub line_width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Image(ImageLayout),
    Stroke(StrokeLayout),
}

/// The single page of a label document
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Everything painted on the page, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(geometry: &PageGeometry) -> Page {
        Page {
            media_box: Rect::from_xywh(Pt(0.0), Pt(0.0), geometry.width, geometry.height),
            content_box: geometry.content_box().flip_y(geometry.height),
            contents: Vec::default(),
        }
    }

    /// The page height, used to flip label space coordinates into PDF space
    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_stroke(&mut self, stroke: StrokeLayout) {
        self.contents.push(PageContents::Stroke(stroke));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        parent: Ref,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<Ref, std::io::Error> {
        let id = refs.gen(RefType::Page);

        let mut resource_fonts: Vec<(String, Ref)> = Vec::new();
        for font in BuiltinFont::ALL {
            if let Some(font_ref) = refs.get(RefType::Font(font.index())) {
                resource_fonts.push((format!("F{}", font.index()), font_ref));
            }
        }
        let mut resource_images: Vec<(String, Ref)> = Vec::new();
        for (image_id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                resource_images.push((format!("I{}", image_id.index()), image_ref));
            }
        }

        let content_id = refs.gen(RefType::ContentForPage);

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (name, font_ref) in resource_fonts.iter() {
            fonts.pair(Name(name.as_bytes()), *font_ref);
        }
        fonts.finish();
        let mut x_objects = resources.x_objects();
        for (name, image_ref) in resource_images.iter() {
            x_objects.pair(Name(name.as_bytes()), *image_ref);
        }
        x_objects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(id)
    }
}
