pub mod romaji;
pub mod settings;
pub mod unicode;
