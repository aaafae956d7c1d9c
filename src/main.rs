mod api;
mod app;
mod components;
mod config;
mod effects;
mod error;
mod flow;
mod models;
mod pages;
mod storage;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
