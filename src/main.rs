#![allow(non_snake_case)]

#[cfg(feature = "web")]
fn main() {
    use dioxus_logger::tracing::{info, Level};

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting paceline");
    dioxus::launch(paceline::client::App);
}

#[cfg(not(feature = "web"))]
fn main() {
    eprintln!("paceline was built without the `web` feature; there is nothing to run");
}
