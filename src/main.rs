//! Migralog
//!
//! Migraine attack tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Monthly calendar overview of logged attacks
//! - Guided multi-step attack logging (severity, symptoms, triggers, meds)
//! - Insights with frequency charts, trigger breakdowns, and a doctor report
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives in session memory; persistence and sync are
//! the responsibility of external collaborators.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
