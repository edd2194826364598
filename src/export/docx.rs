//! DOCX Packing and Saving
//!
//! Packs the neutral [`DocBlock`] sequence into a binary DOCX file using
//! docx-rs. The packer and the file-save mechanism are both behind traits so
//! the page shell receives them as injected collaborators; the defaults here
//! cover the common case (in-memory packing, plain file write).

use docx_rs::*;
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::export::document::{DocBlock, RUN_SIZE};

/// File name of the exported document.
pub const DEFAULT_EXPORT_FILENAME: &str = "exported-text.docx";

/// Numbering definition id used for the bullet list. Id 1 is left to any
/// document-default numbering.
const BULLET_NUMBERING_ID: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Encodes document blocks into a binary word-processor file.
pub trait DocumentPacker {
    fn pack(&self, blocks: &[DocBlock]) -> Result<Vec<u8>>;
}

/// Persists the packed bytes under a file name.
pub trait FileSaver {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// DOCX Packer
// ─────────────────────────────────────────────────────────────────────────────

/// Default packer producing a DOCX with a heading style and a single-level
/// bullet numbering definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxPacker;

impl DocxPacker {
    pub fn new() -> Self {
        Self
    }

    /// Register the paragraph styles used by heading blocks.
    fn initialize_styles(docx: Docx) -> Docx {
        let heading1 = Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .size(32)
            .bold();

        docx.add_style(heading1)
    }

    /// Register the bullet list numbering definition.
    fn initialize_numbering(docx: Docx) -> Docx {
        let bullet_level = Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

        docx.add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(bullet_level),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
    }

    /// Map one block to a docx-rs paragraph.
    fn build_paragraph(block: &DocBlock) -> Paragraph {
        let mut paragraph = Paragraph::new();

        for run in &block.runs {
            let mut docx_run = Run::new();
            if run.break_before {
                docx_run = docx_run.add_break(BreakType::TextWrapping);
            }
            docx_run = docx_run.add_text(run.text.as_str()).size(RUN_SIZE);
            if run.bold {
                docx_run = docx_run.bold();
            }
            paragraph = paragraph.add_run(docx_run);
        }

        if block.heading.is_some() {
            paragraph = paragraph.style("Heading1");
        }
        if block.bullet {
            paragraph = paragraph
                .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
        }

        paragraph
    }
}

impl DocumentPacker for DocxPacker {
    fn pack(&self, blocks: &[DocBlock]) -> Result<Vec<u8>> {
        let mut docx = Self::initialize_numbering(Self::initialize_styles(Docx::new()));

        for block in blocks {
            docx = docx.add_paragraph(Self::build_paragraph(block));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|err| Error::Pack {
                message: err.to_string(),
            })?;

        let bytes = cursor.into_inner();
        debug!("Packed {} blocks into {} bytes", blocks.len(), bytes.len());
        Ok(bytes)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Disk Saver
// ─────────────────────────────────────────────────────────────────────────────

/// Default saver writing the exported file into a target directory.
#[derive(Debug, Clone)]
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(|source| Error::FileWrite { path, source })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::{DocBlock, TextRun};

    fn sample_blocks() -> Vec<DocBlock> {
        vec![
            DocBlock::heading("Report"),
            DocBlock::paragraph(vec![
                TextRun::new("Name").bold().with_break(),
                TextRun::new("Alice").with_break(),
            ]),
            DocBlock::bulleted(TextRun::new("G1")),
        ]
    }

    #[test]
    fn test_pack_produces_zip_container() {
        let bytes = DocxPacker::new().pack(&sample_blocks()).unwrap();
        // DOCX is a zip archive; check the local-file-header magic
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_pack_empty_block_list() {
        let bytes = DocxPacker::new().pack(&[]).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_disk_saver_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DiskSaver::new(dir.path());

        let bytes = DocxPacker::new().pack(&sample_blocks()).unwrap();
        saver.save(DEFAULT_EXPORT_FILENAME, &bytes).unwrap();

        let written = std::fs::read(dir.path().join(DEFAULT_EXPORT_FILENAME)).unwrap();
        assert_eq!(written, bytes);
    }

    #[test]
    fn test_disk_saver_missing_dir_fails() {
        let saver = DiskSaver::new("/nonexistent/folio-test-dir");
        let err = saver.save(DEFAULT_EXPORT_FILENAME, b"data").unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
