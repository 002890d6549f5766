//! koyo-ui - UI components for the Kōyō gallery
//!
//! Contains display types, stores, pure view components, and the browser
//! interop helpers they need. The web app wires them to real state.

pub mod components;
pub mod display_types;
pub mod dom;
pub mod hooks;
pub mod storage;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
pub use hooks::{use_persisted_theme, use_top_bar_visibility};
