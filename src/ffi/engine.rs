use std::ffi::{c_char, c_void};

use kana_session::{EngineDelegate, KanaInputEngine, KeyEvent};

use super::{ffi_close, ffi_guard, owned_new, to_cstring};

// --- KanaInputEngine FFI ---

/// Host callback receiving (processed, display) after every handled event.
/// Both strings are only valid for the duration of the call.
pub type KanaProcessedCallback =
    extern "C" fn(ctx: *mut c_void, processed: *const c_char, display: *const c_char);

/// Forwards engine notifications to a C callback.
///
/// The caller guarantees `ctx` stays valid until the engine is freed.
struct CallbackDelegate {
    callback: KanaProcessedCallback,
    ctx: *mut c_void,
}

impl EngineDelegate for CallbackDelegate {
    fn on_processed(&mut self, processed: &str, display: &str) {
        let processed = to_cstring(processed);
        let display = to_cstring(display);
        (self.callback)(self.ctx, processed.as_ptr(), display.as_ptr());
    }
}

/// Opaque engine handle owned by the host.
pub struct KanaEngine {
    inner: KanaInputEngine<CallbackDelegate>,
}

/// Create an engine using the global romaji table and settings.
/// Returns NULL when `callback` is NULL.
#[no_mangle]
pub extern "C" fn kana_engine_new(
    callback: Option<KanaProcessedCallback>,
    ctx: *mut c_void,
) -> *mut KanaEngine {
    let Some(callback) = callback else {
        return std::ptr::null_mut();
    };
    owned_new(KanaEngine {
        inner: KanaInputEngine::new(CallbackDelegate { callback, ctx }),
    })
}

ffi_close!(kana_engine_free, KanaEngine);

/// Insert one Unicode scalar value. Returns 0 if `engine` is NULL or `scalar`
/// is not a valid `char`; the callback is not invoked in that case.
#[no_mangle]
pub extern "C" fn kana_engine_insert(engine: *mut KanaEngine, scalar: u32) -> u8 {
    ffi_guard!(0;
        mut: engine = engine,
    );
    let Some(ch) = char::from_u32(scalar) else {
        return 0;
    };
    engine.inner.handle_event(KeyEvent::Char(ch));
    1
}

#[no_mangle]
pub extern "C" fn kana_engine_backspace(engine: *mut KanaEngine) {
    ffi_guard!(();
        mut: engine = engine,
    );
    engine.inner.handle_event(KeyEvent::Backspace);
}

/// Return key: resolve the pending romaji.
#[no_mangle]
pub extern "C" fn kana_engine_commit(engine: *mut KanaEngine) {
    ffi_guard!(();
        mut: engine = engine,
    );
    engine.inner.handle_event(KeyEvent::Return);
}

#[no_mangle]
pub extern "C" fn kana_engine_accept_candidate(engine: *mut KanaEngine, candidate: *const c_char) {
    ffi_guard!(();
        mut: engine = engine,
        str: candidate = candidate,
    );
    engine
        .inner
        .handle_event(KeyEvent::AcceptCandidate(candidate.to_string()));
}

/// Committed text. Free with `kana_string_free`; NULL if `engine` is NULL.
#[no_mangle]
pub extern "C" fn kana_engine_text(engine: *const KanaEngine) -> *mut c_char {
    ffi_guard!(std::ptr::null_mut();
        ref: engine = engine,
    );
    to_cstring(engine.inner.text()).into_raw()
}

/// Committed text plus rendered pending romaji. Free with `kana_string_free`.
#[no_mangle]
pub extern "C" fn kana_engine_display(engine: *const KanaEngine) -> *mut c_char {
    ffi_guard!(std::ptr::null_mut();
        ref: engine = engine,
    );
    to_cstring(&engine.inner.display()).into_raw()
}
