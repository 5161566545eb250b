use std::path::PathBuf;

use chrono::Utc;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, SplitError};
use crate::sanitize::FilenameSanitizer;
use crate::segmenter::{segment_chapters, Chapter};
use crate::splitter::{partition_by_count, partition_by_size};
use crate::textio::{read_lines, write_lines};

/// How a split job carves up the input.
#[derive(Debug, Clone)]
pub enum SplitMode {
    /// Chunks capped at a byte budget.
    Size { max_bytes: u64 },
    /// A fixed number of output files.
    Count { files: usize },
    /// A new file wherever a trimmed line matches the pattern.
    Chapter { pattern: String },
}

/// One complete split operation: input file, output directory, strategy.
#[derive(Debug, Clone)]
pub struct SplitJob {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mode: SplitMode,
}

/// Report of a finished split.
#[derive(Debug, Serialize)]
pub struct SplitSummary {
    pub source: String,
    pub source_encoding: String,
    pub line_count: usize,
    pub created_at: String,
    pub files: Vec<OutputFile>,
}

/// One output file the job wrote.
#[derive(Debug, Serialize)]
pub struct OutputFile {
    pub path: String,
    pub lines: usize,
    /// Chapter title, present for chapter-mode outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SplitJob {
    /// Run the job to completion, returning a report of what was written.
    ///
    /// The whole input is read into memory before the first output file is
    /// created; output handles are scoped to one file each.
    pub fn run(&self) -> Result<SplitSummary> {
        if !self.input.is_file() {
            return Err(SplitError::InvalidInputPath(self.input.clone()));
        }
        if !self.output_dir.is_dir() {
            return Err(SplitError::InvalidOutputDirectory(self.output_dir.clone()));
        }

        let base_name = self
            .input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        let (input_lines, source_encoding) = read_lines(&self.input)?;
        let line_count = input_lines.len();

        let files = match &self.mode {
            SplitMode::Size { max_bytes } => {
                let parts = partition_by_size(input_lines, *max_bytes);
                self.write_parts(&base_name, parts)?
            }
            SplitMode::Count { files } => {
                let parts = partition_by_count(input_lines, *files);
                self.write_parts(&base_name, parts)?
            }
            SplitMode::Chapter { pattern } => {
                if pattern.is_empty() {
                    return Err(SplitError::EmptyPattern);
                }
                let boundary = Regex::new(pattern)?;
                let chapters = segment_chapters(&input_lines, |line| boundary.is_match(line));
                self.write_chapters(&base_name, chapters)?
            }
        };

        Ok(SplitSummary {
            source: self.input.display().to_string(),
            source_encoding: source_encoding.to_string(),
            line_count,
            created_at: Utc::now().to_rfc3339(),
            files,
        })
    }

    /// Write anonymous parts as `{base}_{index:04}.txt`, 1-based.
    fn write_parts(&self, base_name: &str, parts: Vec<Vec<String>>) -> Result<Vec<OutputFile>> {
        let mut written = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let path = self
                .output_dir
                .join(format!("{}_{:04}.txt", base_name, i + 1));
            write_lines(&path, part)?;
            written.push(OutputFile {
                path: path.display().to_string(),
                lines: part.len(),
                title: None,
            });
        }
        Ok(written)
    }

    /// Write chapters as `{base}_{index:04}_{sanitizedTitle}.txt`, 1-based.
    fn write_chapters(&self, base_name: &str, chapters: Vec<Chapter>) -> Result<Vec<OutputFile>> {
        let mut written = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let safe_title = FilenameSanitizer::sanitize(&chapter.title);
            let path = self.output_dir.join(format!(
                "{}_{:04}_{}.txt",
                base_name,
                chapter.index + 1,
                safe_title
            ));
            write_lines(&path, &chapter.lines)?;
            written.push(OutputFile {
                path: path.display().to_string(),
                lines: chapter.lines.len(),
                title: Some(chapter.title),
            });
        }
        Ok(written)
    }
}
