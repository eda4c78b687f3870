/*! PDF export of the final dataset.

Renders the balanced table as a landscape A4 document: a bold header row,
then one row per pair with text wrapped inside fixed-width columns and page
breaks when a row would run off the bottom margin.

The base-14 Helvetica font only covers Latin-1, so source text in other
scripts is transliterated to `?` the way the CSV-to-PDF tooling this
replaces did.
!*/
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::Error;
use crate::pipelines::types::AnnotatedPair;

const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 40.0;
const FONT_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 10.0;
const ROW_PADDING: f32 = 4.0;

const COLUMNS: [(&str, f32); 6] = [
    ("index", 0.06),
    ("language", 0.07),
    ("source", 0.30),
    ("target", 0.30),
    ("feature1", 0.17),
    ("feature2", 0.10),
];

/// Latin-1 with `?` for everything outside it, parentheses escaped for the
/// PDF string literal syntax.
fn encode_cell(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                bytes.push(b'\\');
                bytes.push(c as u8);
            }
            c if (c as u32) < 256 => bytes.push(c as u32 as u8),
            _ => bytes.push(b'?'),
        }
    }
    bytes
}

/// Greedy wrap on a character budget derived from the column width.
fn wrap(text: &str, width: f32) -> Vec<String> {
    let budget = ((width - ROW_PADDING) / (FONT_SIZE * 0.5)).max(1.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > budget {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        // a single over-long word gets hard-split
        for chunk_start in (0..word.chars().count()).step_by(budget) {
            let chunk: String = word.chars().skip(chunk_start).take(budget).collect();
            if chunk_start > 0 {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(&chunk);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn row_cells(pair: &AnnotatedPair) -> [String; 6] {
    [
        pair.index.to_string(),
        pair.lang.code().to_string(),
        pair.source.clone(),
        pair.target.clone(),
        pair.feature1
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", "),
        pair.feature2
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", "),
    ]
}

fn text_op(font: &str, x: f32, y: f32, bytes: Vec<u8>) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Real(FONT_SIZE)],
        ),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new("Tj", vec![Object::String(bytes, StringFormat::Literal)]),
        Operation::new("ET", vec![]),
    ]
}

struct PageBuilder {
    operations: Vec<Operation>,
    y: f32,
}

impl PageBuilder {
    fn new() -> Self {
        let mut page = Self {
            operations: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        };
        page.header();
        page
    }

    fn header(&mut self) {
        let table_width = PAGE_WIDTH - 2.0 * MARGIN;
        let mut x = MARGIN;
        for (name, share) in COLUMNS {
            self.operations
                .extend(text_op("F2", x, self.y, encode_cell(name)));
            x += share * table_width;
        }
        self.y -= LINE_HEIGHT * 1.5;
    }

    /// `false` when the row does not fit on this page. `force` skips the
    /// fit check so an over-tall row on a fresh page is emitted anyway.
    fn push_row(&mut self, cells: &[String; 6], force: bool) -> bool {
        let table_width = PAGE_WIDTH - 2.0 * MARGIN;
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, share))| wrap(cell, share * table_width))
            .collect();
        let row_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let row_height = row_lines as f32 * LINE_HEIGHT + ROW_PADDING;

        if !force && self.y - row_height < MARGIN {
            return false;
        }

        let mut x = MARGIN;
        for (lines, (_, share)) in wrapped.iter().zip(COLUMNS) {
            for (i, line) in lines.iter().enumerate() {
                let line_y = self.y - i as f32 * LINE_HEIGHT;
                self.operations
                    .extend(text_op("F1", x, line_y, encode_cell(line)));
            }
            x += share * table_width;
        }
        self.y -= row_height;
        true
    }
}

/// Writes the dataset as a table PDF to `dst`.
pub fn export_pdf(pairs: &[AnnotatedPair], dst: &Path) -> Result<(), Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let mut page = PageBuilder::new();
    for pair in pairs {
        let cells = row_cells(pair);
        if !page.push_row(&cells, false) {
            kids.push(flush_page(&mut doc, page, pages_id, resources_id)?.into());
            page = PageBuilder::new();
            page.push_row(&cells, true);
        }
    }
    kids.push(flush_page(&mut doc, page, pages_id, resources_id)?.into());

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(dst)?;
    Ok(())
}

fn flush_page(
    doc: &mut Document,
    page: PageBuilder,
    pages_id: lopdf::ObjectId,
    resources_id: lopdf::ObjectId,
) -> Result<lopdf::ObjectId, Error> {
    let content = Content {
        operations: page.operations,
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(PAGE_WIDTH),
            Object::Real(PAGE_HEIGHT),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    Ok(page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use crate::pipelines::types::{InfoType, QuestionType};

    #[test]
    fn test_wrap_respects_budget() {
        let lines = wrap("one two three four five six seven eight", 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 14);
        }
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 60.0), vec![String::new()]);
    }

    #[test]
    fn test_encode_cell_escapes_and_translits() {
        assert_eq!(encode_cell("a(b)"), b"a\\(b\\)".to_vec());
        assert_eq!(encode_cell("هل"), b"??".to_vec());
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.pdf");
        let pairs = vec![AnnotatedPair {
            index: 0,
            source: "Wat is jou naam?".to_string(),
            target: "What is your name?".to_string(),
            lang: Lang::Af,
            feature1: vec![InfoType::Negation],
            feature2: vec![QuestionType::WhQuestion],
        }];

        export_pdf(&pairs, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
