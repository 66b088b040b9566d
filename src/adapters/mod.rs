pub mod pixel_format;
pub mod wasmtime_module;
