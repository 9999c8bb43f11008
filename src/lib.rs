//! # config-general
//!
//! A parser for Apache `Config::General` style configuration files.
//!
//! Text goes through two stages:
//!
//! 1. [`parser`] turns it into a raw parse tree of options and blocks.
//! 2. [`merge`] folds that tree into a single [`Tree`], where repeated keys
//!    become lists and repeated blocks are merged.
//!
//! [`load`] runs both stages and is the entry point most callers want.
//!
//! ```text
//! name = demo
//! <server web>
//!     port 8080
//!     port 8081
//! </server web>
//! ```
//!
//! loads as `{"name": "demo", "server": {"web": {"port": ["8080", "8081"]}}}`.

pub mod error;
pub mod formats;
pub mod loader;
pub mod merge;
pub mod parser;
pub mod position;
pub mod value;

pub use error::{LoadError, ParseError, SyntaxError};
pub use loader::{load, load_file};
pub use merge::{merge, merge_into_array, merge_options, merge_value};
pub use parser::{parse, RawDocument, RawNode, RawValue};
pub use value::{Mapping, Tree, Value};
