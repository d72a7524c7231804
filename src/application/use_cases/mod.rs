pub mod archetypes;
pub mod generate;
pub mod prompts;
pub mod synthesizer;
pub mod text;
pub mod topics;
