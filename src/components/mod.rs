//! UI components.

pub mod app_model;
