/// Characters that cannot appear in a filename on at least one supported
/// platform (the Windows reserved set, a superset of the Unix one).
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Longest filename fragment produced, in characters.
const MAX_FRAGMENT_CHARS: usize = 50;

pub struct FilenameSanitizer;

impl FilenameSanitizer {
    /// Map an arbitrary chapter title to a filesystem-safe fragment.
    ///
    /// Every reserved or control character becomes `_`; the result is
    /// truncated to 50 characters.
    pub fn sanitize(title: &str) -> String {
        title
            .chars()
            .map(|c| {
                if RESERVED.contains(&c) || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .take(MAX_FRAGMENT_CHARS)
            .collect()
    }
}
