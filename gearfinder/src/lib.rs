//! # Gearfinder
//!
//! Relay activity queries to a hosted model and shape the returned
//! gear-recommendation list.
//!
//! The system is deliberately thin: a user query is embedded into a fixed
//! instruction template, sent to Cloudflare Workers AI in a single non-streaming
//! round trip, and the model's raw text is parsed as JSON and returned wrapped in
//! `{ "result": { "response": ... } }`. A per-request debug record (query + raw
//! text) is written best-effort to a timestamped file. Nothing is retried;
//! failures collapse to one coarse error at the wire.
//!
//! ## Main modules
//!
//! - [`relay`]: the pipeline (build, invoke, persist, parse, envelope).
//! - [`llm`]: [`ModelClient`] trait with [`WorkersAi`] and [`MockModel`].
//! - [`prompt`]: the fixed system instruction and message pair builder.
//! - [`protocol`]: wire types ([`RecommendRequest`], [`ResponseEnvelope`],
//!   [`ErrorBody`]).
//! - [`gear`]: typed projection of the recommendation object
//!   ([`RecommendationSet`], [`GearItem`]), order-preserving.
//! - [`debug_log`]: timestamped per-request record.
//! - [`search`]: front-end view state as a tagged union + reducer
//!   ([`SearchUi`], [`ViewState`], [`SearchEvent`]), recent searches, progress
//!   steps.
//! - [`activities`]: the fixed tile catalog.
//! - [`message`], [`error`]: chat turns and the relay error type.
//!
//! Key types are re-exported at the crate root:
//! `use gearfinder::{ModelClient, RelaySettings, ResponseEnvelope};`

pub mod activities;
pub mod debug_log;
pub mod error;
pub mod gear;
pub mod llm;
pub mod message;
pub mod prompt;
pub mod protocol;
pub mod relay;
pub mod search;

pub use error::RelayError;
pub use gear::{GearItem, RecommendationSet, ShapeError};
pub use llm::{MockModel, ModelClient, WorkersAi, MODEL_ID};
pub use message::Message;
pub use protocol::{ErrorBody, RecommendRequest, ResponseEnvelope, ResultBody};
pub use relay::{recommend, recommend_from_body, RelaySettings, DEFAULT_RESULTS_DIR};
pub use search::{
    ProgressStep, RecentSearches, SearchEvent, SearchUi, StepState, ViewState, RECENT_CAP,
    STEP_LABELS,
};
