use log::LevelFilter;
use ublib::{
    analysis::{AnalyzerOptions, DEFAULT_TOKEN_PATTERN},
    sequences::PaddedSequenceOptions,
};

use crate::{
    documents::{DocumentArgs, RowOutputArgs},
    logging::LogArgs,
};

/// Args for the pad command.
#[derive(clap::Args, Debug)]
pub struct PadArgs {
    /// Sort rows by descending length.
    #[arg(long)]
    sort: bool,

    /// Drop unknown tokens instead of writing UNK.
    #[arg(long)]
    drop_unk: bool,

    /// Keep empty rows empty instead of writing [UNK].
    #[arg(long)]
    no_fix_empty: bool,

    /// Prefix every row with its input index and true length.
    #[arg(long)]
    lengths: bool,

    /// Lowercase documents before tokenizing.
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,

    /// Keep document case.
    #[arg(long, overrides_with = "lowercase")]
    no_lowercase: bool,

    /// Token regex.
    #[arg(long, default_value_t = DEFAULT_TOKEN_PATTERN.to_string())]
    token_pattern: String,

    #[command(flatten)]
    input: DocumentArgs,

    #[command(flatten)]
    output: RowOutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl PadArgs {
    fn options(&self) -> PaddedSequenceOptions {
        let analyzer = AnalyzerOptions::default()
            .with_token_pattern(self.token_pattern.as_str())
            .with_lowercase(self.lowercase || !self.no_lowercase);

        PaddedSequenceOptions::default()
            .with_analyzer(analyzer)
            .with_sort(self.sort)
            .with_drop_unk(self.drop_unk)
            .with_fix_empty(!self.no_fix_empty)
    }

    /// Run the pad command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Warn)?;

        let docs = self.input.read_documents()?;
        let mut sequencer = self.options().build::<u32>()?;
        let batch = sequencer.fit_transform(&docs)?;
        log::info!(
            "vocabulary size {:?}, batch shape {:?}",
            sequencer.vocabulary_size(),
            batch.tokens().dim()
        );

        let mut writer = self.output.open_writer()?;
        for (row, tokens) in batch.tokens().rows().into_iter().enumerate() {
            let prefix = if self.lengths {
                vec![batch.order()[row] as u64, batch.lengths()[row] as u64]
            } else {
                Vec::new()
            };
            writer.write_row(prefix.into_iter().chain(tokens.iter().map(|&t| u64::from(t))))?;
        }
        writer.finish()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Args, commands::Commands};

    fn parse_pad(args: &[&str]) -> super::PadArgs {
        let args = Args::try_parse_from(["ublib", "pad"].iter().chain(args)).unwrap();
        match args.command {
            Commands::Pad(pad) => pad,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_pad_flags() {
        let options = parse_pad(&[]).options();
        assert!(!options.sort());
        assert!(options.fix_empty());
        assert!(options.counter().analyzer().lowercase());

        let options = parse_pad(&["--sort", "--drop-unk", "--no-fix-empty"]).options();
        assert!(options.sort());
        assert!(options.drop_unk());
        assert!(!options.fix_empty());

        let options = parse_pad(&["--no-lowercase"]).options();
        assert!(!options.counter().analyzer().lowercase());

        let options = parse_pad(&["--no-lowercase", "--lowercase"]).options();
        assert!(options.counter().analyzer().lowercase());
    }
}
