// Panic hook and console logging helpers shared by the rest of the crate

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Writes a formatted line to the browser console. Native builds (unit tests)
// have no console to write to, so the message is dropped there.
macro_rules! log {
    ( $( $t:tt )* ) => {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!( $( $t )* ).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!( $( $t )* );
    };
}

macro_rules! log_error {
    ( $err:expr ) => {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1($err);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = $err;
    };
}
