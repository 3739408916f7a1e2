//! # Word2vec Text Format
//!
//! ```text
//! <vocab_size> <dim>
//! <word> <v_1> ... <v_dim>
//! ...
//! ```
//!
//! Files may be plain text or gzip compressed.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use ndarray::Array2;

use crate::{
    embeddings::KeyedVectors,
    errors::{UbResult, UblibError},
};

/// Upper bounds on what an untrusted header may preallocate.
const MAX_PREALLOCATED_VECTORS: usize = 1 << 16;
const MAX_PREALLOCATED_COMPONENTS: usize = 1 << 24;

/// The `(vocab_size, dim)` header of a word2vec text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word2VecHeader {
    /// The number of vectors in the file.
    pub vocab_size: usize,

    /// The dimension of each vector.
    pub dim: usize,
}

impl Word2VecHeader {
    /// Interpret peeked header fields.
    ///
    /// ## Returns
    /// The header; or [`UblibError::MalformedHeader`] unless there are exactly two fields.
    pub fn from_fields(fields: &[usize]) -> UbResult<Self> {
        match *fields {
            [vocab_size, dim] => Ok(Self { vocab_size, dim }),
            _ => Err(UblibError::MalformedHeader(format!(
                "expected 2 fields, found {fields:?}"
            ))),
        }
    }

    /// Read the header of a word2vec file.
    pub fn peek<P: AsRef<Path>>(
        path: P,
        compressed: bool,
    ) -> UbResult<Self> {
        Self::from_fields(&peek_word2vec_format(path, compressed)?)
    }
}

/// Open a plain or gzip text file for line reading.
pub fn open_text_file<P: AsRef<Path>>(
    path: P,
    compressed: bool,
) -> UbResult<Box<dyn BufRead>> {
    let file = File::open(path)?;
    Ok(if compressed {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    })
}

/// Parse a header line as whitespace-separated integers.
///
/// Fields are counts, so negative values are rejected.
fn parse_header_line(line: &str) -> UbResult<Vec<usize>> {
    let line = line.trim();
    if line.is_empty() {
        return Err(UblibError::MalformedHeader(line.to_string()));
    }
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<usize>()
                .map_err(|_| UblibError::MalformedHeader(line.to_string()))
        })
        .collect()
}

/// Read the first line of `reader` as a list of integers.
pub fn read_word2vec_header<R: BufRead>(mut reader: R) -> UbResult<Vec<usize>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_header_line(&line)
}

/// Peek at the header of an embedding file, reading only its first line.
///
/// ## Arguments
/// * `path` - The file to read.
/// * `compressed` - Whether the file is gzip compressed.
///
/// ## Returns
/// The header integers (for word2vec, `[vocab_size, dim]`);
/// [`UblibError::Io`] if the file cannot be read, or
/// [`UblibError::MalformedHeader`] if the first line is empty or holds a
/// field that is not an unsigned integer (`-1` is rejected).
pub fn peek_word2vec_format<P: AsRef<Path>>(
    path: P,
    compressed: bool,
) -> UbResult<Vec<usize>> {
    read_word2vec_header(open_text_file(path, compressed)?)
}

/// Read a full word2vec text embedding.
pub fn read_word2vec_text<R: BufRead>(reader: R) -> UbResult<KeyedVectors> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => Word2VecHeader::from_fields(&parse_header_line(&line?)?)?,
        None => return Err(UblibError::MalformedHeader(String::new())),
    };

    let total = header
        .vocab_size
        .checked_mul(header.dim)
        .ok_or_else(|| {
            UblibError::MalformedHeader(format!(
                "{} x {} components overflow usize",
                header.vocab_size, header.dim
            ))
        })?;

    let mut words = Vec::with_capacity(header.vocab_size.min(MAX_PREALLOCATED_VECTORS));
    let mut data = Vec::with_capacity(total.min(MAX_PREALLOCATED_COMPONENTS));
    let mut line_no = 1;
    for line in lines {
        let line = line?;
        line_no += 1;

        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        if words.len() == header.vocab_size {
            return Err(UblibError::MalformedEmbedding {
                line: line_no,
                reason: format!("more than {} vectors", header.vocab_size),
            });
        }

        let start = data.len();
        for field in fields {
            let value = field
                .parse::<f32>()
                .map_err(|e| UblibError::MalformedEmbedding {
                    line: line_no,
                    reason: format!("{field:?}: {e}"),
                })?;
            data.push(value);
        }
        if data.len() - start != header.dim {
            return Err(UblibError::MalformedEmbedding {
                line: line_no,
                reason: format!(
                    "expected {} components, found {}",
                    header.dim,
                    data.len() - start
                ),
            });
        }
        words.push(word.to_string());
    }

    if words.len() != header.vocab_size {
        return Err(UblibError::MalformedEmbedding {
            line: line_no,
            reason: format!(
                "expected {} vectors, found {}",
                header.vocab_size,
                words.len()
            ),
        });
    }

    log::debug!(
        "loaded {} word2vec vectors of dimension {}",
        header.vocab_size,
        header.dim
    );

    let vectors = Array2::from_shape_vec((header.vocab_size, header.dim), data).map_err(|e| {
        UblibError::MalformedEmbedding {
            line: line_no,
            reason: e.to_string(),
        }
    })?;
    KeyedVectors::new(words, vectors)
}

/// Load a plain or gzip word2vec text embedding.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(path)))]
pub fn load_word2vec_text<P: AsRef<Path>>(
    path: P,
    compressed: bool,
) -> UbResult<KeyedVectors> {
    read_word2vec_text(open_text_file(path, compressed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        assert_eq!(
            read_word2vec_header("10000 10\nthe 0.1\n".as_bytes()).unwrap(),
            vec![10000, 10]
        );
        assert_eq!(
            read_word2vec_header("  3   7  1 ".as_bytes()).unwrap(),
            vec![3, 7, 1]
        );
        assert!(matches!(
            read_word2vec_header("".as_bytes()),
            Err(UblibError::MalformedHeader(_))
        ));
        assert!(matches!(
            read_word2vec_header("10000 ten\n".as_bytes()),
            Err(UblibError::MalformedHeader(_))
        ));
        assert!(matches!(
            read_word2vec_header("-1 10\n".as_bytes()),
            Err(UblibError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_header_fields() {
        assert_eq!(
            Word2VecHeader::from_fields(&[10000, 10]).unwrap(),
            Word2VecHeader {
                vocab_size: 10000,
                dim: 10
            }
        );
        assert!(Word2VecHeader::from_fields(&[10000]).is_err());
    }

    #[test]
    fn test_read_text() {
        let text = "2 3\ncat 1 0 0.5\n\ndog 0 1 -0.5\n";
        let kv = read_word2vec_text(text.as_bytes()).unwrap();
        assert_eq!(kv.index2word(), &["cat", "dog"]);
        assert_eq!(kv.dim(), 3);
        assert_eq!(kv.get("dog").unwrap().to_vec(), vec![0.0, 1.0, -0.5]);
    }

    #[test]
    fn test_read_text_errors() {
        let short_row = "2 3\ncat 1 0\ndog 0 1 0\n";
        assert!(matches!(
            read_word2vec_text(short_row.as_bytes()),
            Err(UblibError::MalformedEmbedding { line: 2, .. })
        ));

        let missing_row = "2 3\ncat 1 0 0\n";
        assert!(matches!(
            read_word2vec_text(missing_row.as_bytes()),
            Err(UblibError::MalformedEmbedding { .. })
        ));

        let extra_row = "1 1\ncat 1\ndog 2\n";
        assert!(matches!(
            read_word2vec_text(extra_row.as_bytes()),
            Err(UblibError::MalformedEmbedding { line: 3, .. })
        ));

        let bad_value = "1 1\ncat one\n";
        assert!(matches!(
            read_word2vec_text(bad_value.as_bytes()),
            Err(UblibError::MalformedEmbedding { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_text_oversized_header() {
        let huge_count = "18446744073709551615 1\ncat 1\n";
        assert!(matches!(
            read_word2vec_text(huge_count.as_bytes()),
            Err(UblibError::MalformedEmbedding { line: 2, .. })
        ));

        let huge_count_overflow = "18446744073709551615 2\ncat 1 0\n";
        assert!(matches!(
            read_word2vec_text(huge_count_overflow.as_bytes()),
            Err(UblibError::MalformedHeader(_))
        ));

        let overflowing = "5000000000 5000000000\ncat 1 0\n";
        assert!(matches!(
            read_word2vec_text(overflowing.as_bytes()),
            Err(UblibError::MalformedHeader(_))
        ));

        let huge_total = "100000000000 100000000\ncat 1 0\n";
        assert!(matches!(
            read_word2vec_text(huge_total.as_bytes()),
            Err(UblibError::MalformedEmbedding { line: 2, .. })
        ));
    }
}
