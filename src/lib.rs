// Public API exports
pub mod encoding;
pub mod error;
pub mod job;
pub mod sanitize;
pub mod segmenter;
pub mod splitter;
pub mod textio;

// Re-export main types for convenience
pub use error::{Result, SplitError};

pub use segmenter::{
    derive_title, segment_chapters, Chapter, DEFAULT_CHAPTER_PATTERN, PREFACE_TITLE, UNKNOWN_TITLE,
};

pub use splitter::{partition_by_count, partition_by_size};

pub use job::{OutputFile, SplitJob, SplitMode, SplitSummary};

pub use encoding::decode_text;
pub use sanitize::FilenameSanitizer;
pub use textio::{read_lines, write_lines, LINE_ENDING};
