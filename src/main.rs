#![allow(warnings)]
//! Cotizaciones Dashboard Entry Point

mod models;
mod config;
mod commands;
mod state;
mod render;
mod modal;
mod dashboard;
mod context;
mod store;
mod dom;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
