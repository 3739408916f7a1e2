use crate::commands::{embed::EmbedArgs, pad::PadArgs, peek::PeekArgs};

pub mod embed;
pub mod pad;
pub mod peek;

/// Subcommands for ublib.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the header integers of a word2vec file.
    Peek(PeekArgs),

    /// Fit on the input lines and print them as padded index rows.
    Pad(PadArgs),

    /// Print TF-IDF weighted embeddings of the input lines.
    Embed(EmbedArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Peek(cmd) => cmd.run(),
            Commands::Pad(cmd) => cmd.run(),
            Commands::Embed(cmd) => cmd.run(),
        }
    }
}
