//! Fixed-size text chunking and truncation

/// Split text into non-overlapping chunks of at most `chunk_size` characters,
/// in original order. Concatenating the chunks reproduces the input exactly.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if text.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Truncate to at most `max_chars` characters, always on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_count_is_ceiling_of_length() {
        let text = "a".repeat(2000);
        let chunks = chunk_text(&text, 800);
        assert_eq!(chunks.len(), 3); // ceil(2000 / 800)
        assert_eq!(chunks[0].len(), 800);
        assert_eq!(chunks[1].len(), 800);
        assert_eq!(chunks[2].len(), 400);
    }

    #[test]
    fn test_chunks_concatenate_to_original() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let chunks = chunk_text(&text, 800);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_exact_multiple_produces_no_empty_chunk() {
        let text = "x".repeat(1600);
        let chunks = chunk_text(&text, 800);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 800));
    }

    #[test]
    fn test_short_text_is_a_single_chunk() {
        let chunks = chunk_text("short resume", 800);
        assert_eq!(chunks, vec!["short resume".to_string()]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(chunk_text("", 800).is_empty());
    }

    #[test]
    fn test_chunking_respects_multibyte_boundaries() {
        let text = "héllo wörld ".repeat(100);
        let chunks = chunk_text(&text, 7);
        assert_eq!(chunks.concat(), text);
        assert!(chunks.iter().all(|c| c.chars().count() <= 7));
    }

    #[test]
    fn test_truncate_respects_cap() {
        let text = "a".repeat(5000);
        assert_eq!(truncate_chars(&text, 2000).len(), 2000);
        assert_eq!(truncate_chars(&text, 1500).len(), 1500);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("short", 2000), "short");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated.chars().count(), 4);
    }
}
