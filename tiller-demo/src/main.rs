//! Demo application: declares the route table and hands the router to the
//! terminal shell.

mod app;
mod pages;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tiller::HistoryMode;

use crate::app::App;
use crate::pages::{Home, NewPage};
use crate::view::View;

fn main() -> Result<()> {
    init_tracing()?;

    let builder = tiller::routes! {
        "/" => Home: Box::new(Home::default()) as Box<dyn View>,
        "/new-page" => NewPage: Box::new(NewPage),
    }
    .history(HistoryMode::Path);

    // Optional deep link, e.g. `tiller-demo /new-page`.
    let router = match std::env::args().nth(1) {
        Some(path) => builder.build_at(&path)?,
        None => builder.build()?,
    };

    App::new(router).run()
}

/// Log to a file, and only when asked: the alternate screen must stay clean.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let log = std::fs::File::create("tiller-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}
