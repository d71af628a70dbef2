//! `screenkit_core` -- screenshot capture, OCR and mouse automation.
//!
//! This crate holds all behaviour behind the two standalone CLI tools in
//! `screenkit-cli`:
//! - `screen-capture` (capture, OCR, listing)
//! - `screen-click` (mouse input and natural-language commands)
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `ScreenkitError` enum via `thiserror` |
//! | [`action`] | `Point`, `ClickKind`, `DragCommand`, `Action` |
//! | [`command`] | Natural-language command classifier (regex) |
//! | [`settings`] | Per-call `InputSettings` |
//! | [`input`] | `InputDriver` trait, `Automator`, enigo / `SendInput` drivers |
//! | [`capture`] | Native OS screenshot utility and `xcap` library capture |
//! | [`ocr`] | Tesseract OCR (feature `ocr`) |
//! | [`listing`] | Screenshot file listing |
//! | [`paths`] | `~` expansion and absolute path resolution |

pub mod action;
pub mod capture;
pub mod command;
pub mod errors;
pub mod input;
pub mod listing;
pub mod ocr;
pub mod paths;
pub mod settings;
