//! Integration tests exercising the public API end to end.

mod registry;
mod scenarios;
