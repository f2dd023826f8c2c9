use thiserror::Error;

/// All errors that generating a label can surface to the caller
#[derive(Error, Debug)]
pub enum LabelError {
    /// The label has no title (blank or whitespace only)
    #[error("title is required")]
    TitleRequired,

    /// Writing the finished PDF to disk failed
    #[error("failed to save PDF: {0}")]
    Save(#[source] std::io::Error),

    #[error("document has no page to write")]
    /// A document was written before a page was added to it
    PageMissing,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),
}
