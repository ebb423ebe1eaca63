// Tag extraction: stop-word sets, tokenization and frequency counting.

pub mod counter;
pub mod source;
pub mod stopwords;
pub mod table;
pub mod tokenize;
pub mod traits;

pub use counter::TagCounter;
pub use source::{FileSource, InlineText, StdinSource, TextSource};
pub use stopwords::{BuiltinLanguage, StopWordSet};
pub use table::FrequencyTable;
pub use traits::TagExtractor;
