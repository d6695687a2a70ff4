pub mod normalize;
pub mod ranking;
pub mod results;
pub mod scoring;
pub mod special;
pub mod validation;
pub mod weighting;

pub use normalize::{median, normalize};
pub use ranking::{aggregate, Ranking};
pub use results::ResultsService;
pub use scoring::ScoringEngine;
pub use special::{compute_special_raw, special_game, validate_special_raw};
pub use validation::{validate_input, ValidationError};
pub use weighting::apply_weight;
