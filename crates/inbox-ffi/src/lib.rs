//! UniFFI bindings crate for the inbox library
//!
//! This crate wraps the inbox crate for UniFFI library mode binding
//! generation. It re-exports the FFI module and the scaffolding from the
//! inbox crate.
//!
//! ## Building for Android
//!
//! 1. Build the library for the device ABIs (with the NDK linker configured):
//!    ```bash
//!    cargo build --release -p inbox-ffi --target aarch64-linux-android
//!    cargo build --release -p inbox-ffi --target x86_64-linux-android
//!    ```
//!
//! 2. Generate Kotlin bindings:
//!    ```bash
//!    cargo run -p inbox-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-linux-android/release/libinbox_ffi.so \
//!        --language kotlin \
//!        --out-dir generated/kotlin
//!    ```
//!
//! 3. Copy the `.so` files into `jniLibs/<abi>/` of the extension app.

pub use inbox::ffi::*;

// Library mode needs the scaffolding symbols in this cdylib
inbox::uniffi_reexport_scaffolding!();
