//! Configuration loading at the process boundary.
//!
//! The environment is read here, once, and turned into explicit domain
//! configuration. Pure schema parsing lives in `domain::configuration`.

mod load_guard_config;

pub use load_guard_config::{
    GUARD_API_KEY_ENV, GUARD_URL_ENV, load_guard_config, parse_guard_config,
};
