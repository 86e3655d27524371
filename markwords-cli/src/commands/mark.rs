//! Mark command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{ArgGroup, Args, ValueEnum};
use markwords_core::{Boundary, Highlighter, MatchOptions, MatchStrategy, Regex, Segment};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Placeholder replaced by each word in a `--regex` template
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Arguments for the mark command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub struct MarkArgs {
    /// Word or phrase to highlight (repeatable)
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// File with one word or phrase per line
    #[arg(long, value_name = "FILE")]
    pub words_file: Option<PathBuf>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Inline text to mark instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat words as regular expressions instead of literal text
    #[arg(long, overrides_with = "escape")]
    pub no_escape: bool,

    /// Match words literally (overrides `escape = false` in config)
    #[arg(long, overrides_with = "no_escape")]
    pub escape: bool,

    /// Match letter case exactly
    #[arg(short = 's', long, overrides_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Ignore letter case (overrides `case_sensitive = true` in config)
    #[arg(long, overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Word boundary mode: true, false, start or end
    #[arg(short, long, value_name = "MODE")]
    pub boundary: Option<Boundary>,

    /// Custom matcher template; every {word} is replaced by the raw word
    /// and the result is used as a regex verbatim
    #[arg(long, value_name = "TEMPLATE")]
    pub regex: Option<String>,

    /// Slice files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A named text to be marked
#[derive(Debug)]
struct Document {
    source: String,
    text: String,
}

impl MarkArgs {
    /// Execute the mark command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting word marking");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let words = self.collect_words(&config)?;
        if words.is_empty() {
            log::warn!("No words given; output will contain no matches");
        }

        let strategy = self.build_strategy(&config)?;
        log::debug!("Match strategy: {:?}", strategy);
        let highlighter = Highlighter::new(&words, &strategy).map_err(CliError::from)?;

        let format = self.resolve_format(&config)?;
        let documents = self.load_documents()?;
        log::info!(
            "Marking {} word(s) in {} document(s) as {:?}",
            words.len(),
            documents.len(),
            format
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);
        let sliced = self.slice_documents(&highlighter, &documents, &progress);
        progress.finish();

        let headers = documents.len() > 1;
        let mut formatter = create_formatter(format, self.open_writer()?, &config, headers);

        for (document, segments) in documents.iter().zip(&sliced) {
            let matches = segments.iter().filter(|s| s.matched).count();
            log::debug!("{}: {} matched segment(s)", document.source, matches);

            formatter.format_document(&document.source, &document.text, segments)?;
        }

        formatter.finish()?;

        log::info!("Marking complete");
        Ok(())
    }

    /// Words from the command line and words file, falling back to config
    fn collect_words(&self, config: &CliConfig) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if let Some(path) = &self.words_file {
            let content = FileReader::read_text(path)?;
            words.extend(
                content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }

        if words.is_empty() {
            words = config.matching.words.clone();
        }

        Ok(words)
    }

    /// Resolve the match strategy from flags and config
    fn build_strategy(&self, config: &CliConfig) -> Result<MatchStrategy> {
        if let Some(template) = &self.regex {
            if self.escape_flag().is_some()
                || self.case_sensitive_flag().is_some()
                || self.boundary.is_some()
            {
                log::warn!("--regex ignores the escape, case and boundary flags");
            }
            return Ok(template_strategy(template.clone()));
        }

        let base = config.matching.to_options()?;
        let options = MatchOptions::builder()
            .escape(self.escape_flag().unwrap_or(base.escape))
            .case_sensitive(self.case_sensitive_flag().unwrap_or(base.case_sensitive))
            .boundary(self.boundary.unwrap_or(base.boundary))
            .build();

        Ok(MatchStrategy::Options(options))
    }

    /// `--escape`/`--no-escape`, if either was given
    fn escape_flag(&self) -> Option<bool> {
        flag_pair(self.escape, self.no_escape)
    }

    /// `--case-sensitive`/`--ignore-case`, if either was given
    fn case_sensitive_flag(&self) -> Option<bool> {
        flag_pair(self.case_sensitive, self.ignore_case)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        if let Some(text) = &self.text {
            return Ok(vec![Document {
                source: "<text>".to_string(),
                text: text.clone(),
            }]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        files
            .iter()
            .map(|path| -> Result<Document> {
                let size = FileReader::file_size(path)?;
                log::debug!("Reading {} ({} bytes)", path.display(), size);
                Ok(Document {
                    source: path.display().to_string(),
                    text: FileReader::read_text(path)?,
                })
            })
            .collect()
    }

    /// Slice every document, ticking `progress` as each one finishes
    fn slice_documents(
        &self,
        highlighter: &Highlighter,
        documents: &[Document],
        progress: &ProgressReporter,
    ) -> Vec<Vec<Segment>> {
        let slice_one = |document: &Document| {
            let segments = highlighter.slice(&document.text);
            progress.file_completed(&document.source);
            segments
        };

        if self.parallel {
            log::debug!("Slicing in parallel");
            documents.par_iter().map(slice_one).collect()
        } else {
            documents.iter().map(slice_one).collect()
        }
    }

    fn open_writer(&self) -> Result<BoxedWriter> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run more than once in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Collapse an on/off flag pair; clap keeps only the last one given
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Custom strategy compiling `template` with each word substituted in
pub fn template_strategy(template: String) -> MatchStrategy {
    MatchStrategy::custom(move |word| {
        let pattern = template.replace(WORD_PLACEHOLDER, word);
        Ok(Regex::new(&pattern)?)
    })
}
