use crate::error::LabelError;
use crate::refs::{ObjectReferences, RefType};
use image::{ColorType, DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// A decoded raster image, ready to be embedded as an image XObject. Images are
/// decoded into memory when they are created, so the file they came from can be
/// removed as soon as this returns.
pub struct Image {
    pub image: DynamicImage,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    grey: bool,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, LabelError> {
        let data = std::fs::read(path.as_ref())?;
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;
        Ok(Self::new(image))
    }

    pub fn new(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            image,
            width,
            height,
        }
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.image.color().has_alpha().then(|| {
            let alphas: Vec<_> = self.image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        // QR codes come out as single channel images; keep them that way
        let grey = matches!(self.image.color(), ColorType::L8 | ColorType::La8);
        let bytes = if grey {
            compress_to_vec_zlib(self.image.to_luma8().as_raw(), level)
        } else {
            compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level)
        };

        EncodeOutput { grey, bytes, mask }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        if encoded.grey {
            image.color_space().device_gray();
        } else {
            image.color_space().device_rgb();
        }
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
