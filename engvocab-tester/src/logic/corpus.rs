use std::convert::Infallible;
use std::path::{Path, PathBuf};

use engvocab_game::{BankLoad, CorpusLoader, QuestionBank};

/// Corpus shipped with the web build.
pub const EMBEDDED_CORPUS: &str =
    include_str!("../../../engvocab-web/static/english_game_questions.txt");

/// Reads the corpus from disk.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusLoader for FileCorpus {
    type Error = std::io::Error;

    fn load_corpus(&self) -> Result<String, Self::Error> {
        std::fs::read_to_string(&self.path)
    }
}

/// The corpus compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCorpus;

impl CorpusLoader for EmbeddedCorpus {
    type Error = Infallible;

    fn load_corpus(&self) -> Result<String, Self::Error> {
        Ok(EMBEDDED_CORPUS.to_string())
    }
}

fn load_with<L: CorpusLoader>(loader: &L) -> BankLoad {
    QuestionBank::from_corpus(loader.load_corpus().map_err(Into::into))
}

/// Load the bank from `path`, or the embedded corpus when none is given.
#[must_use]
pub fn load_bank(path: Option<&Path>) -> BankLoad {
    match path {
        Some(path) => load_with(&FileCorpus::new(path)),
        None => load_with(&EmbeddedCorpus),
    }
}
