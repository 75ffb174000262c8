//! Ferrous Synth Infrastructure Layer
pub mod dns;
