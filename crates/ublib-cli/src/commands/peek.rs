use log::LevelFilter;
use ublib::embeddings::peek_word2vec_format;

use crate::logging::LogArgs;

/// Args for the peek command.
#[derive(clap::Args, Debug)]
pub struct PeekArgs {
    /// The embedding file.
    path: String,

    /// The file is gzip compressed.
    #[arg(long)]
    gzip: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl PeekArgs {
    /// Run the peek command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Warn)?;

        let header = peek_word2vec_format(&self.path, self.gzip)?;
        let fields: Vec<String> = header.iter().map(ToString::to_string).collect();
        println!("{}", fields.join(" "));

        Ok(())
    }
}
