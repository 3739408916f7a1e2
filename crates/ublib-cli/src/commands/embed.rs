use log::LevelFilter;
use ublib::{
    embeddings::load_word2vec_text,
    vectorizers::{EmbeddedVectorizer, Norm, TfidfOptions},
};

use crate::{
    documents::{DocumentArgs, RowOutputArgs},
    logging::LogArgs,
};

/// Args for the embed command.
#[derive(clap::Args, Debug)]
pub struct EmbedArgs {
    /// The word2vec text embedding.
    #[arg(long)]
    embedding: String,

    /// The embedding is gzip compressed.
    #[arg(long)]
    gzip: bool,

    /// Row normalization: l1, l2 or none.
    #[arg(long, default_value = "l2")]
    norm: Norm,

    /// Use `1 + ln(tf)` term frequencies.
    #[arg(long)]
    sublinear_tf: bool,

    #[command(flatten)]
    input: DocumentArgs,

    #[command(flatten)]
    output: RowOutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl EmbedArgs {
    /// Run the embed command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Warn)?;

        let kv = load_word2vec_text(&self.embedding, self.gzip)?;
        log::info!("loaded {} vectors of dimension {}", kv.len(), kv.dim());

        let options = TfidfOptions::default()
            .with_norm(self.norm)
            .with_sublinear_tf(self.sublinear_tf);
        let mut embedder = EmbeddedVectorizer::from_keyed_vectors(kv, options)?;

        let docs = self.input.read_documents()?;
        let vectors = embedder.fit_transform(&docs)?;

        let mut writer = self.output.open_writer()?;
        for row in vectors.rows() {
            writer.write_row(row.iter().map(|value| format!("{value:.6}")))?;
        }
        writer.finish()?;

        Ok(())
    }
}
