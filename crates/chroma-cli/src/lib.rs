//! Library components of the `chroma-audit` command.

pub mod logging;
pub mod request;
