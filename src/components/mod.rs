//! Reusable UI components

pub mod help_overlay;
