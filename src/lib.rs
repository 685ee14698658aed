// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Kana input engine for software keyboards.
//!
//! Re-exports the engine (`kana_session`) and the romaji/settings layer
//! (`kana_core`), and exposes a C API for hosts that embed the static library.

pub mod ffi;
pub mod trace_init;

pub use kana_core::romaji;
pub use kana_core::settings;
pub use kana_core::unicode;
pub use kana_session::{keystrokes, EngineDelegate, KanaInputEngine, KeyEvent};
