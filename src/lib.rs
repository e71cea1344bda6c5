//! Eidophone library - glyph sequences rendered as tone stacks and cymatic fields

pub mod audio;
pub mod cli;
pub mod cymatics;
pub mod engine;
pub mod error;
pub mod folio;
pub mod frequencies;
pub mod glyphs;
pub mod params;
pub mod pipeline;
pub mod tokenizer;
pub mod viewer;

pub use engine::{Engine, FolioRun, RunOptions};
pub use error::{EngineError, Result, Stage};
pub use glyphs::{GlyphEntry, GlyphTable};
pub use pipeline::{render_for_input_set, Rendering};
pub use tokenizer::{tokenize, ScanStep, Scanner};
