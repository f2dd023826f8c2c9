//! Content stream rendering for the label page.

use crate::page::{PageContents, SpanFont, SpanLayout};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level content
/// items into low-level PDF operators. Everything is painted in black.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    let mut current_font: Option<SpanFont> = None;

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => {
                render_text_span(&mut content, span, &mut current_font)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Stroke(stroke) => {
                write!(&mut content, "q\n")?;
                write!(&mut content, "0 G\n")?;
                write!(&mut content, "{} w\n", stroke.line_width)?;
                write!(
                    &mut content,
                    "{} {} {} {} re S\n",
                    stroke.rect.x1,
                    stroke.rect.y1,
                    stroke.rect.width(),
                    stroke.rect.height()
                )?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    current_font: &mut Option<SpanFont>,
) -> Result<(), std::io::Error> {
    if span.text.is_empty() {
        return Ok(());
    }

    write!(content, "BT\n")?;
    // font state survives between text objects, only switch when it changes
    if *current_font != Some(span.font) {
        *current_font = Some(span.font);
        write!(content, "/F{} {} Tf\n", span.font.font.index(), span.font.size)?;
    }
    write!(content, "0 g\n")?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
    write!(content, "(")?;
    for byte in span.font.font.encode(&span.text) {
        match byte {
            b'(' | b')' | b'\\' => content.write_all(&[b'\\', byte])?,
            _ => content.write_all(&[byte])?,
        }
    }
    write!(content, ") Tj\n")?;
    write!(content, "ET\n")?;
    Ok(())
}
