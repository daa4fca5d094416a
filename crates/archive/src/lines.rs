use crate::error::ArchiveError;
use byteorder::{LittleEndian, ReadBytesExt};
use inkpress_types::{BrushColor, BrushType, Layer, Line, Point, StrokeData};
use std::io::{Cursor, Read};

const HEADER_LEN: usize = 43;
const HEADER_PREFIX: &str = "reMarkable .lines file, version=";

// Samples carry x, y, speed, direction, width and pressure; only the
// coordinates are kept.
const DISCARDED_POINT_FIELDS: usize = 4;

// Counts come from untrusted input; preallocation is bounded here and the
// vectors grow normally past it.
const MAX_PREALLOC: usize = 4096;

/// Parses a binary `.lines` stroke file (format versions 3 and 5) into the
/// stroke data model.
pub fn parse_lines(bytes: &[u8]) -> Result<StrokeData, ArchiveError> {
    let version = parse_header(bytes)?;
    let mut reader = Cursor::new(&bytes[HEADER_LEN..]);

    let layer_count = read_count(&mut reader, "layer count")?;
    let mut layers = Vec::with_capacity(layer_count.min(MAX_PREALLOC));
    for _ in 0..layer_count {
        let line_count = read_count(&mut reader, "line count")?;
        let mut lines = Vec::with_capacity(line_count.min(MAX_PREALLOC));
        for _ in 0..line_count {
            lines.push(parse_line(&mut reader, version)?);
        }
        layers.push(Layer { lines });
    }
    Ok(StrokeData { layers })
}

fn parse_header(bytes: &[u8]) -> Result<u8, ArchiveError> {
    if bytes.len() < HEADER_LEN {
        return Err(ArchiveError::MalformedLines("truncated header".to_string()));
    }
    let header = std::str::from_utf8(&bytes[..HEADER_LEN])
        .map_err(|_| ArchiveError::MalformedLines("header is not ASCII".to_string()))?;
    let version = header
        .strip_prefix(HEADER_PREFIX)
        .and_then(|rest| rest.trim_end().parse::<u8>().ok())
        .ok_or_else(|| {
            ArchiveError::MalformedLines(format!("unrecognized header {header:?}"))
        })?;
    match version {
        3 | 5 => Ok(version),
        other => Err(ArchiveError::MalformedLines(format!(
            "unsupported lines format version {other}"
        ))),
    }
}

fn parse_line(reader: &mut Cursor<&[u8]>, version: u8) -> Result<Line, ArchiveError> {
    let raw_brush = read_u32(reader, "brush type")?;
    let raw_color = read_u32(reader, "brush color")?;
    read_u32(reader, "line padding")?;
    let brush_size = read_f32(reader, "brush size")?;
    if version >= 5 {
        read_u32(reader, "line padding")?;
    }
    let point_count = read_count(reader, "point count")?;

    let brush_type = BrushType::from_raw(raw_brush).unwrap_or_else(|| {
        log::warn!("unknown brush code {raw_brush}, rendering as fineliner");
        BrushType::Fineliner
    });

    let mut points = Vec::with_capacity(point_count.min(MAX_PREALLOC));
    for _ in 0..point_count {
        let x = read_f32(reader, "point x")?;
        let y = read_f32(reader, "point y")?;
        for _ in 0..DISCARDED_POINT_FIELDS {
            read_f32(reader, "point attribute")?;
        }
        points.push(Point::new(x, y));
    }

    Ok(Line {
        brush_type,
        brush_color: BrushColor::from_raw(raw_color),
        brush_size,
        points,
    })
}

fn read_count(reader: &mut Cursor<&[u8]>, what: &str) -> Result<usize, ArchiveError> {
    Ok(read_u32(reader, what)? as usize)
}

fn read_u32(reader: &mut impl Read, what: &str) -> Result<u32, ArchiveError> {
    reader
        .read_u32::<LittleEndian>()
        .map_err(|_| ArchiveError::MalformedLines(format!("truncated reading {what}")))
}

fn read_f32(reader: &mut impl Read, what: &str) -> Result<f32, ArchiveError> {
    reader
        .read_f32::<LittleEndian>()
        .map_err(|_| ArchiveError::MalformedLines(format!("truncated reading {what}")))
}
