// src/sheet/document.rs
//! Append-only PDF assembly on top of `pdf-writer`.
//!
//! Object ids are handed out in order: catalog, page tree and the Helvetica
//! font first, then image XObjects and page/content pairs as they are drawn.
//! The page tree is written last, once every page id is known.

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Name, Pdf, Rect as PdfRect, Ref, Str};

use super::image::{DecodedImage, ImageData};
use super::layout::Rect;
use super::winansi::to_winansi;

const FONT: Name<'static> = Name(b"F1");
const DEFLATE_LEVEL: u8 = 6;

/// An image XObject already written into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    name: String,
    id: Ref,
}

/// Content stream of one page under construction.
pub struct PageCanvas {
    content: Content,
    images: Vec<ImageHandle>,
}

impl PageCanvas {
    /// Unfilled black rectangle.
    pub fn stroke_rect(&mut self, r: Rect, line_width: f32) {
        self.content.save_state();
        self.content.set_line_width(line_width);
        self.content.set_stroke_rgb(0.0, 0.0, 0.0);
        self.content.rect(r.x, r.y, r.width, r.height);
        self.content.stroke();
        self.content.restore_state();
    }

    /// Single line of Helvetica with its baseline starting at `(x, y)`.
    pub fn text(&mut self, x: f32, y: f32, size: f32, text: &str) {
        let encoded = to_winansi(text);
        self.content.begin_text();
        self.content.set_font(FONT, size);
        self.content.next_line(x, y);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    /// Paint `image` stretched over `r`.
    pub fn image(&mut self, image: &ImageHandle, r: Rect) {
        self.content.save_state();
        self.content.transform([r.width, 0.0, 0.0, r.height, r.x, r.y]);
        self.content.x_object(Name(image.name.as_bytes()));
        self.content.restore_state();
        if !self.images.contains(image) {
            self.images.push(image.clone());
        }
    }
}

pub struct SheetDocument {
    pdf: Pdf,
    next_id: i32,
    page_tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
    page_width: f32,
    page_height: f32,
}

impl SheetDocument {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        let mut pdf = Pdf::new();
        let catalog = Ref::new(1);
        let page_tree = Ref::new(2);
        let font = Ref::new(3);

        pdf.catalog(catalog).pages(page_tree);
        pdf.type1_font(font)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            next_id: 4,
            page_tree,
            font,
            pages: Vec::new(),
            page_width,
            page_height,
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn begin_page(&self) -> PageCanvas {
        PageCanvas { content: Content::new(), images: Vec::new() }
    }

    /// Write an image XObject. JPEG streams go in as they are under DCTDecode;
    /// raw pixels become Flate-compressed DeviceRGB with a DeviceGray soft
    /// mask when the image carries alpha.
    pub fn embed_image(&mut self, img: &DecodedImage) -> ImageHandle {
        let id = self.alloc();
        let (w, h) = (img.width as i32, img.height as i32);

        match &img.data {
            ImageData::Jpeg { bytes, gray } => {
                let mut xobj = self.pdf.image_xobject(id, bytes);
                xobj.filter(Filter::DctDecode);
                xobj.width(w);
                xobj.height(h);
                if *gray {
                    xobj.color_space().device_gray();
                } else {
                    xobj.color_space().device_rgb();
                }
                xobj.bits_per_component(8);
            }
            ImageData::Raw { rgb, alpha } => {
                let mask = match alpha {
                    Some(alpha) => {
                        let mask_id = self.alloc();
                        let data = compress_to_vec_zlib(alpha, DEFLATE_LEVEL);
                        let mut smask = self.pdf.image_xobject(mask_id, &data);
                        smask.filter(Filter::FlateDecode);
                        smask.width(w);
                        smask.height(h);
                        smask.color_space().device_gray();
                        smask.bits_per_component(8);
                        Some(mask_id)
                    }
                    None => None,
                };

                let data = compress_to_vec_zlib(rgb, DEFLATE_LEVEL);
                let mut xobj = self.pdf.image_xobject(id, &data);
                xobj.filter(Filter::FlateDecode);
                xobj.width(w);
                xobj.height(h);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
                if let Some(mask_id) = mask {
                    xobj.s_mask(mask_id);
                }
            }
        }

        ImageHandle { name: format!("Im{}", id.get()), id }
    }

    /// Close a page: its content stream and page object go into the document.
    pub fn finish_page(&mut self, canvas: PageCanvas) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        let (page_tree, font) = (self.page_tree, self.font);

        let data = canvas.content.finish();
        self.pdf.stream(content_id, &data);

        let mut page = self.pdf.page(page_id);
        page.media_box(PdfRect::new(0.0, 0.0, self.page_width, self.page_height));
        page.parent(page_tree);
        page.contents(content_id);
        let mut resources = page.resources();
        resources.fonts().pair(FONT, font);
        if !canvas.images.is_empty() {
            let mut xobjects = resources.x_objects();
            for img in &canvas.images {
                xobjects.pair(Name(img.name.as_bytes()), img.id);
            }
        }
        drop(resources);
        drop(page);

        self.pages.push(page_id);
    }

    /// Serialize the whole document.
    pub fn finish(mut self) -> Vec<u8> {
        let count = self.pages.len() as i32;
        self.pdf.pages(self.page_tree).kids(self.pages.iter().copied()).count(count);
        self.pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn empty_document_is_still_a_pdf() {
        let bytes = SheetDocument::new(595.0, 842.0).finish();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/MediaBox"), 0);
    }

    #[test]
    fn pages_text_and_images_are_written() {
        let mut doc = SheetDocument::new(595.0, 842.0);
        let img = DecodedImage {
            width: 2,
            height: 1,
            data: ImageData::Raw { rgb: vec![255, 0, 0, 0, 0, 255], alpha: Some(vec![255, 0]) },
        };

        let mut canvas = doc.begin_page();
        canvas.stroke_rect(Rect { x: 20.0, y: 573.0, width: 179.0, height: 249.0 }, 1.0);
        canvas.text(30.0, 792.0, 12.0, "Bulbasaur");
        let handle = doc.embed_image(&img);
        canvas.image(&handle, Rect { x: 50.0, y: 600.0, width: 120.0, height: 60.0 });
        doc.finish_page(canvas);

        let canvas = doc.begin_page();
        doc.finish_page(canvas);
        assert_eq!(doc.page_count(), 2);

        let bytes = doc.finish();
        assert_eq!(count(&bytes, b"/MediaBox"), 2);
        assert_eq!(count(&bytes, b"(Bulbasaur)"), 1);
        assert_eq!(count(&bytes, b"/SMask"), 1);
        assert_eq!(count(&bytes, b"/Helvetica"), 1);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 1);
        assert_eq!(count(&bytes, b"/DCTDecode"), 0);
    }

    #[test]
    fn jpeg_stream_is_written_verbatim() {
        // SOI, a stand-in payload, EOI: the writer never looks inside
        let stream = vec![0xFF, 0xD8, 0x13, 0x37, 0xC0, 0xDE, 0xFF, 0xD9];
        let mut doc = SheetDocument::new(595.0, 842.0);
        let mut canvas = doc.begin_page();
        for gray in [false, true] {
            let img = DecodedImage { width: 4, height: 4, data: ImageData::Jpeg { bytes: stream.clone(), gray } };
            let handle = doc.embed_image(&img);
            canvas.image(&handle, Rect { x: 0.0, y: 0.0, width: 4.0, height: 4.0 });
        }
        doc.finish_page(canvas);

        let bytes = doc.finish();
        assert_eq!(count(&bytes, b"/DCTDecode"), 2);
        assert_eq!(count(&bytes, &stream), 2);
        assert_eq!(count(&bytes, b"/DeviceGray"), 1);
        assert_eq!(count(&bytes, b"/DeviceRGB"), 1);
        assert_eq!(count(&bytes, b"/FlateDecode"), 0);
    }
}
