//! Transliteration between Latin/Cyrillic Turkic orthographies and the
//! Old Turkic runic alphabet.
//!
//! All conversions are pure and total: characters the table does not know
//! pass through unchanged.

pub mod convert;
pub mod script;
pub mod settings;
pub mod table;
pub mod tokenizer;
pub mod unicode;

pub use convert::{from_runic, to_runic};
pub use script::{Orthography, ParseScriptError, Script};
pub use table::{Letter, RuneTable, TableError};
pub use tokenizer::{ReverseTokens, Token, Tokens};
