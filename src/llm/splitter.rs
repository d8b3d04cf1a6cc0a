//! Recursive character splitter used to bound what is sent to the
//! summarization backend.
//!
//! Text is split on the coarsest separator present (paragraphs, lines, words,
//! then graphemes); pieces that are still too long are split again with the
//! next separator. Neighbouring pieces are then merged back into chunks of at
//! most `chunk_size` characters, each chunk repeating up to `chunk_overlap`
//! characters from the end of the previous one.

use crate::error::{Result, ResumeScorerError};
use std::collections::VecDeque;
use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 || chunk_size <= chunk_overlap {
            return Err(ResumeScorerError::Configuration(
                "Chunk size must be greater than overlap".to_string(),
            ));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with(text, &self.separators)
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        // "" is always last and always applies.
        let idx = separators
            .iter()
            .position(|s| s.is_empty() || text.contains(s.as_str()))
            .unwrap_or(separators.len() - 1);
        let separator = separators[idx].as_str();
        let finer = &separators[idx + 1..];

        let pieces: Vec<&str> = if separator.is_empty() {
            text.graphemes(true).collect()
        } else {
            text.split(separator).filter(|p| !p.is_empty()).collect()
        };

        let mut chunks = Vec::new();
        let mut fitting: Vec<&str> = Vec::new();

        for piece in pieces {
            if char_len(piece) <= self.chunk_size {
                fitting.push(piece);
                continue;
            }

            if !fitting.is_empty() {
                chunks.extend(self.merge(&fitting, separator));
                fitting.clear();
            }

            if finer.is_empty() {
                chunks.push(piece.to_string());
            } else {
                chunks.extend(self.split_with(piece, finer));
            }
        }

        if !fitting.is_empty() {
            chunks.extend(self.merge(&fitting, separator));
        }

        chunks
    }

    fn merge(&self, pieces: &[&str], separator: &str) -> Vec<String> {
        let sep_len = char_len(separator);
        let mut docs = Vec::new();
        let mut current: VecDeque<&str> = VecDeque::new();
        let mut total = 0;

        for piece in pieces {
            let len = char_len(piece);
            let joiner = if current.is_empty() { 0 } else { sep_len };

            if total + len + joiner > self.chunk_size && !current.is_empty() {
                push_doc(&mut docs, &current, separator);

                // Keep a tail of at most `chunk_overlap` chars that still leaves room for `piece`.
                while let Some(first) = current.front() {
                    if total <= self.chunk_overlap && total + len + sep_len <= self.chunk_size {
                        break;
                    }
                    let removed = char_len(first) + if current.len() > 1 { sep_len } else { 0 };
                    total -= removed;
                    current.pop_front();
                }
            }

            if !current.is_empty() {
                total += sep_len;
            }
            total += len;
            current.push_back(piece);
        }

        push_doc(&mut docs, &current, separator);
        docs
    }
}

fn push_doc(docs: &mut Vec<String>, current: &VecDeque<&str>, separator: &str) {
    let doc = current.iter().copied().collect::<Vec<_>>().join(separator);
    let doc = doc.trim();
    if !doc.is_empty() {
        docs.push(doc.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
