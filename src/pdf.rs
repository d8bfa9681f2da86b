//! PDF assembly
//!
//! Takes the images collected by the thread walker, reverses them to
//! root-to-leaf order, splits each at its horizontal midpoint, and writes
//! each half as one full-bleed page of a PDF document.

use std::path::Path;

use image::DynamicImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use crate::error::Result;

/// A4 portrait page box width in PDF points
const PAGE_WIDTH: f32 = 595.28;

/// A4 portrait page box height in PDF points
const PAGE_HEIGHT: f32 = 841.89;

/// Split an image at its horizontal midpoint into left and right halves.
///
/// The midpoint is `width / 2` with floor division, so for odd widths the
/// right half is one column wider than the left. The two halves partition
/// the source exactly: concatenated left-then-right they reconstruct it.
pub fn split_halves(image: &DynamicImage) -> (DynamicImage, DynamicImage) {
    let (width, height) = (image.width(), image.height());
    let mid = width / 2;

    let left = image.crop_imm(0, 0, mid, height);
    let right = image.crop_imm(mid, 0, width - mid, height);
    (left, right)
}

/// Assembles a sequence of images into a single multi-page PDF document
///
/// Stateless across invocations; one call to [`PdfAssembler::build`] is one
/// complete document. Every source image contributes exactly two pages.
pub struct PdfAssembler {
    page_width: f32,
    page_height: f32,
}

impl Default for PdfAssembler {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
        }
    }
}

impl PdfAssembler {
    /// Create an assembler with the default (A4 portrait) page box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a PDF from `images` and write it to `output_path`.
    ///
    /// The input arrives in the walker's leaf-to-root collection order and is
    /// reversed here so pages read root-to-leaf. Each image is split at its
    /// horizontal midpoint and each half is drawn stretched to the full page
    /// box (aspect ratio is not preserved). The document is serialized once
    /// at the end, overwriting any existing file at `output_path`; a failure
    /// partway through leaves no output file behind.
    ///
    /// Empty input is not rejected: the result is a structurally valid
    /// zero-page document. Callers that want the "no images" case to be
    /// user-visible should branch before calling.
    ///
    /// # Errors
    ///
    /// Fails on temp-file I/O, JPEG encoding, or PDF serialization errors.
    pub fn build(&self, images: Vec<DynamicImage>, output_path: &Path) -> Result<()> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(images.len() * 2);

        // Walker order is leaf-to-root; pages read root-to-leaf.
        for image in images.iter().rev() {
            let (left, right) = split_halves(image);
            for half in [&left, &right] {
                page_ids.push(self.append_page(&mut doc, pages_id, half)?);
            }
        }

        let page_count = page_ids.len() as i64;
        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc.save(output_path)?;
        tracing::info!(
            path = %output_path.display(),
            pages = page_count,
            "wrote PDF document"
        );
        Ok(())
    }

    /// Append one page holding `half` stretched to the page box.
    ///
    /// The half is encoded as JPEG through a scoped temporary file, read back
    /// and embedded as a DCTDecode image XObject. The temp handle drops at
    /// the end of this call, so at most one temporary file exists at a time
    /// and it is removed on every exit path.
    fn append_page(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        half: &DynamicImage,
    ) -> Result<ObjectId> {
        let jpeg = encode_page_jpeg(half)?;

        let xobject_id = doc.add_object(Object::Stream(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => half.width() as i64,
                "Height" => half.height() as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        )));

        // Stretch to the page box exactly: scale the unit image square up to
        // page width x height, origin at (0,0).
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        self.page_width.into(),
                        0.into(),
                        0.into(),
                        self.page_height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Object::Stream(Stream::new(
            Dictionary::new(),
            content.encode()?,
        )));

        Ok(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_width.into(),
                self.page_height.into(),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => xobject_id },
            },
        }))
    }
}

/// Encode a half image as JPEG via a scoped temporary file.
///
/// Create, write, read back, delete: the `NamedTempFile` guard removes the
/// file when it drops, including on the error paths.
fn encode_page_jpeg(half: &DynamicImage) -> Result<Vec<u8>> {
    let tmp = tempfile::Builder::new().suffix(".jpg").tempfile()?;

    let rgb = half.to_rgb8();
    rgb.save_with_format(tmp.path(), image::ImageFormat::Jpeg)?;

    let bytes = std::fs::read(tmp.path())?;
    Ok(bytes)
}
