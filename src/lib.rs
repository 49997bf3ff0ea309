//! Find Telugu songs whose lyrics contain a given word.
//!
//! A word is translated through the Microsoft Translator API (via RapidAPI),
//! the translation is searched on Musixmatch, and the resulting tracks are
//! deduplicated and stripped of compilation albums.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
