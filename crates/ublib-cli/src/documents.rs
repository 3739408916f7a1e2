//! Line-per-document input and delimited row output.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

use ublib::embeddings::open_text_file;

/// `None` for stdio ("-" or absent).
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Document source arg group.
#[derive(clap::Args, Debug)]
pub struct DocumentArgs {
    /// Input file, one document per line; "-" or absent reads stdin.
    #[arg(long)]
    pub input: Option<String>,

    /// The input file is gzip compressed.
    #[arg(long, requires = "input")]
    pub input_gzip: bool,

    /// Skip blank lines instead of reading them as empty documents.
    #[arg(long)]
    pub skip_blank: bool,
}

impl DocumentArgs {
    /// Read every input line as a document.
    pub fn read_documents(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let reader: Box<dyn BufRead> = match file_path(&self.input) {
            Some(path) => open_text_file(path, self.input_gzip)?,
            None if self.input_gzip => return Err("--input-gzip needs an input file".into()),
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        };
        Ok(collect_documents(reader, self.skip_blank)?)
    }
}

fn collect_documents<R: BufRead>(
    reader: R,
    skip_blank: bool,
) -> std::io::Result<Vec<String>> {
    let mut docs = Vec::new();
    let mut skipped = 0;
    for line in reader.lines() {
        let line = line?;
        if skip_blank && line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        docs.push(line);
    }
    log::info!("read {} documents, skipped {skipped} blank lines", docs.len());
    Ok(docs)
}

/// Row output arg group.
#[derive(clap::Args, Debug)]
pub struct RowOutputArgs {
    /// Output file; "-" or absent writes stdout.
    #[arg(long)]
    pub output: Option<String>,

    /// Separator between the values of a row.
    #[arg(long, default_value = " ")]
    pub delimiter: String,
}

impl RowOutputArgs {
    /// Open a row writer for the output.
    pub fn open_writer(&self) -> Result<RowWriter<Box<dyn Write>>, Box<dyn std::error::Error>> {
        let inner: Box<dyn Write> = match file_path(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        };
        Ok(RowWriter::new(inner, self.delimiter.clone()))
    }
}

/// Writes one delimited line per row.
pub struct RowWriter<W: Write> {
    inner: W,
    delimiter: String,
}

impl<W: Write> RowWriter<W> {
    /// Wrap `inner`.
    pub fn new(
        inner: W,
        delimiter: String,
    ) -> Self {
        Self { inner, delimiter }
    }

    /// Write `values` joined by the delimiter, then a newline.
    pub fn write_row<I>(
        &mut self,
        values: I,
    ) -> std::io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (idx, value) in values.into_iter().enumerate() {
            if idx > 0 {
                self.inner.write_all(self.delimiter.as_bytes())?;
            }
            write!(self.inner, "{value}")?;
        }
        writeln!(self.inner)
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
