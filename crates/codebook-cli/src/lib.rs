//! Library side of the `codebook` command-line tool.

pub mod logging;
pub mod pipeline;
