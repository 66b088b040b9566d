//! Input adapters for the colour square.
//!
//! This module contains adapters that receive input from windowing events
//! and forward them to the UI controller.

pub mod gui;
