//! Single-page PDF assembly around a print raster.
//!
//! The contract is deliberately small: page size equals the target's total
//! (trim + bleed) physical size, and the raster fills the page exactly.
//! Bleed is baked into the raster itself, so the page carries no separate
//! crop or bleed boxes. The JPEG raster is embedded as a DCTDecode image
//! XObject without re-encoding; `Document::compress` applies lossless Flate
//! to the remaining streams.

use crate::types::Dimensions;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF write failed: {0}")]
    Write(#[from] lopdf::Error),
    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Wrap JPEG raster bytes into a one-page portrait document.
///
/// `raster` is the embedded image's pixel size; `page_points` the physical
/// page size in PDF user-space points.
pub fn wrap_print_raster(
    jpeg: &[u8],
    raster: Dimensions,
    page_points: (f64, f64),
) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    // JPEG goes in as-is; DCTDecode tells the viewer to decode it. Flate on
    // top of JPEG would only grow the file, so compression is disabled for
    // this stream.
    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => raster.width as i64,
            "Height" => raster.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg.to_vec(),
    )
    .with_compression(false);
    let image_id = doc.add_object(image);

    // Image XObjects paint into a 1×1 unit square; scaling the CTM by the
    // page size stretches that square over the full page.
    let (page_w, page_h) = page_points;
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (page_w as f32).into(),
                    0.into(),
                    0.into(),
                    (page_h as f32).into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(page_w as f32),
            Object::Real(page_h as f32),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.compress();
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
