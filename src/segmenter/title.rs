use std::sync::LazyLock;

use regex::Regex;

/// Sentinel title for a chapter with no non-blank line at all.
pub const UNKNOWN_TITLE: &str = "未知章节";

/// How many leading lines are searched for a heading-shaped title.
const TITLE_SCAN_LINES: usize = 5;

/// Lines at or above this many characters are assumed not to be headings.
const MAX_HEADING_CHARS: usize = 100;

/// Fallback titles are clipped to this many characters.
const MAX_FALLBACK_CHARS: usize = 50;

static NUMBERED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第[零一二三四五六七八九十百千\d]+\s*[章回节]").expect("numbered heading regex")
});

static VOLUME_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[上下卷]\s*第?[零一二三四五六七八九十百千\d]+[章回节]?")
        .expect("volume heading regex")
});

static SPECIAL_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[序前言后记尾声]$").expect("special section regex"));

/// Derive a display title for a chapter from its content.
///
/// Scans the first few lines for a line shaped like a recognized heading
/// (numbered chapter, volume, or special section); failing that, falls
/// back to the first non-blank line, clipped to 50 characters with a
/// `...` marker when longer. Re-deriving from a returned title yields the
/// same title again.
pub fn derive_title(lines: &[String]) -> String {
    for line in lines.iter().take(TITLE_SCAN_LINES) {
        let line = line.trim();
        if line.is_empty() || line.chars().count() >= MAX_HEADING_CHARS {
            continue;
        }
        if NUMBERED_HEADING.is_match(line)
            || VOLUME_HEADING.is_match(line)
            || SPECIAL_SECTION.is_match(line)
        {
            return line.to_string();
        }
    }

    for line in lines {
        if !line.trim().is_empty() {
            return if line.chars().count() > MAX_FALLBACK_CHARS {
                let clipped: String = line.chars().take(MAX_FALLBACK_CHARS).collect();
                format!("{}...", clipped)
            } else {
                line.clone()
            };
        }
    }

    UNKNOWN_TITLE.to_string()
}
