//! UniFFI bindgen binary for generating Kotlin/Swift bindings
//!
//! Usage:
//!   cargo run -p inbox-ffi --features bindgen --bin uniffi-bindgen generate \
//!       --library target/aarch64-linux-android/release/libinbox_ffi.so \
//!       --language kotlin \
//!       --out-dir generated/kotlin

fn main() {
    uniffi::uniffi_bindgen_main()
}
