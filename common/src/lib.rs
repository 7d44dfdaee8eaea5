//! Hanzi Cards Common Library
//!
//! CLIとWeb(WASM)で共有されるデッキモデル・永続化・ビュー投影

pub mod types;
pub mod error;
pub mod storage;
pub mod deck;
pub mod commands;
pub mod view;
pub mod translate;
pub mod contact;

pub use types::{Card, CardDraft, Direction, Settings};
pub use error::{Error, Result};
pub use storage::{KeyValueStore, MemoryStore, CARDS_KEY, SETTINGS_KEY};
pub use deck::{AppState, PendingEdit, StudyKey};
pub use commands::{dispatch, dispatch_with_rng, Command, Outcome, Render};
pub use view::{escape_html, DeckListView, DeckRow, StudyView};
pub use translate::{
    build_translate_url, parse_translate_response, plan_autofill, AutoFill, FormField, LangPair,
    RequestGeneration, Translator, DEFAULT_ENDPOINT,
};
pub use contact::{validate_contact, ContactForm, ContactOutcome};
