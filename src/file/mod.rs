//! Input loading for the `jsonselector` command.
//!
//! This module reads JSON documents from files or stdin, transparently
//! decompressing gzip input and splitting JSON Lines files into documents.

pub mod loader;
