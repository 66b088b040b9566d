pub mod compute_module;
