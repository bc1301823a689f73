use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Duplicate route path: {path}"))]
    DuplicatePath { path: String },

    #[snafu(display("Duplicate route name: {name}"))]
    DuplicateName { name: String },

    #[snafu(display("Route table is empty"))]
    EmptyTable,

    #[snafu(display("Invalid route path {path:?}: {reason}"))]
    InvalidPath { path: String, reason: &'static str },

    #[snafu(display("No route matches path: {path}"))]
    NoMatch { path: String },

    #[snafu(display("No route named: {name}"))]
    UnknownName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
