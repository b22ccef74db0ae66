pub mod config;
pub mod rich_text;
pub mod utils;

pub use config::{ConfigError, ConfigResult, RichTextConfig, RichTextConfigBuilder};
pub use rich_text::{
    Document, Element, Node, Pass, RichTextNormalizer, StyleDeclaration, StyleSet, Text,
    normalize, normalize_with, parse, serialize,
};
