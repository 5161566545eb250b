mod title;


pub use title::{derive_title, UNKNOWN_TITLE};

/// Default boundary pattern carried over from the desktop tool: numbered
/// chapters (第X章/回/节), volume headings, and single-character special
/// sections such as 序.
pub const DEFAULT_CHAPTER_PATTERN: &str = r"第[零一二三四五六七八九十百千\d]+\s*[章回节]|^[上下卷]\s*第?[零一二三四五六七八九十百千\d]+[章回节]?|^[序前言后记尾声]$";

/// Title given to front matter preceding the first chapter heading.
pub const PREFACE_TITLE: &str = "前言简介";

/// One contiguous run of lines, from a boundary line (inclusive) to just
/// before the next.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// 0-based sequence number. Front matter, when present, is chapter 0.
    pub index: usize,
    /// Derived display title (also embedded in output filenames).
    pub title: String,
    /// Content lines, including the heading line itself.
    pub lines: Vec<String>,
}

/// Split `lines` into chapters at every line whose trimmed form satisfies
/// `is_boundary`.
///
/// Non-empty content preceding the first boundary becomes a front-matter
/// chapter titled 前言简介. Concatenating the returned chapters' lines in
/// index order reproduces `lines` exactly; nothing is merged or dropped.
/// Consecutive boundary lines yield legal one-line chapters. Empty input
/// yields no chapters.
pub fn segment_chapters<F>(lines: &[String], is_boundary: F) -> Vec<Chapter>
where
    F: Fn(&str) -> bool,
{
    let mut chapters = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut count = 0;
    let mut seen_boundary = false;

    for line in lines {
        if is_boundary(line.trim()) {
            if !current.is_empty() {
                if seen_boundary {
                    chapters.push(Chapter {
                        index: count,
                        title: derive_title(&current),
                        lines: std::mem::take(&mut current),
                    });
                    count += 1;
                } else {
                    // Everything before the first heading is front matter.
                    chapters.push(Chapter {
                        index: 0,
                        title: PREFACE_TITLE.to_string(),
                        lines: std::mem::take(&mut current),
                    });
                    count = 1;
                }
            }
            seen_boundary = true;
        }
        current.push(line.clone());
    }

    // Flush the last chapter.
    if !current.is_empty() {
        chapters.push(Chapter {
            index: count,
            title: derive_title(&current),
            lines: current,
        });
    }

    chapters
}
