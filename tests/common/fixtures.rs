use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const FINELINER: u32 = 17;
pub const HIGHLIGHTER: u32 = 18;
pub const ERASER: u32 = 6;

const LINES_HEADER_LEN: usize = 43;

/// One stroke for a fixture `.lines` file.
pub struct Stroke {
    pub brush: u32,
    pub color: u32,
    pub size: f32,
    pub points: Vec<(f32, f32)>,
}

pub fn pen_stroke(points: &[(f32, f32)]) -> Stroke {
    Stroke {
        brush: FINELINER,
        color: 0,
        size: 2.0,
        points: points.to_vec(),
    }
}

pub fn brush_stroke(brush: u32, points: &[(f32, f32)]) -> Stroke {
    Stroke {
        brush,
        color: 0,
        size: 2.0,
        points: points.to_vec(),
    }
}

/// Encodes a single-layer version 5 `.lines` stroke file.
pub fn lines_file(strokes: &[Stroke]) -> Vec<u8> {
    let mut buf = b"reMarkable .lines file, version=5".to_vec();
    buf.resize(LINES_HEADER_LEN, b' ');
    push_u32(&mut buf, 1); // one layer
    push_u32(&mut buf, strokes.len() as u32);
    for stroke in strokes {
        push_u32(&mut buf, stroke.brush);
        push_u32(&mut buf, stroke.color);
        push_u32(&mut buf, 0); // padding
        push_f32(&mut buf, stroke.size);
        push_u32(&mut buf, 0); // v5 padding
        push_u32(&mut buf, stroke.points.len() as u32);
        for &(x, y) in &stroke.points {
            push_f32(&mut buf, x);
            push_f32(&mut buf, y);
            // speed, direction, width, pressure
            for _ in 0..4 {
                push_f32(&mut buf, 0.0);
            }
        }
    }
    buf
}

/// Builds a notebook container in memory. Each entry of `pages` is the
/// stroke file for that page, or `None` for a page without annotations.
pub fn notebook_zip(pages: &[Option<Vec<u8>>], payload: Option<&[u8]>) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let id = "notebook";

    let page_ids: Vec<String> = (0..pages.len()).map(|i| format!("page-{i}")).collect();
    let listed = page_ids
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(",");
    writer.start_file(format!("{id}.content"), options).unwrap();
    writer
        .write_all(format!(r#"{{"fileType":"notebook","pages":[{listed}]}}"#).as_bytes())
        .unwrap();

    for (page_id, page) in page_ids.iter().zip(pages) {
        if let Some(bytes) = page {
            writer
                .start_file(format!("{id}/{page_id}.rm"), options)
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
    }
    if let Some(bytes) = payload {
        writer.start_file(format!("{id}.pdf"), options).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// An ebook container, which the generator refuses to process.
pub fn epub_zip() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("book.content", options).unwrap();
    writer
        .write_all(br#"{"fileType":"epub","pages":[]}"#)
        .unwrap();
    writer.start_file("book.epub", options).unwrap();
    writer.write_all(b"PK fake epub payload").unwrap();
    writer.finish().unwrap().into_inner()
}

/// A minimal background document: US Letter pages, each with one filled
/// rectangle so the original content is easy to spot after composition.
pub fn background_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(page_count);
    for _ in 0..page_count {
        let content = Content {
            operations: vec![
                Operation::new("re", vec![50.into(), 50.into(), 200.into(), 100.into()]),
                Operation::new("f", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode background content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save background");
    bytes
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_f32(buf: &mut Vec<u8>, value: f32) {
    buf.extend_from_slice(&value.to_le_bytes());
}
