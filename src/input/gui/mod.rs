//! GUI input adapter for the colour square.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the canvas framebuffer, and egui for the sliders and labels.

pub mod app;
pub mod commands;
