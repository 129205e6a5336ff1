pub mod cli;
pub mod config;
pub mod driver;
pub mod shader;

#[doc(hidden)]
pub mod scratch;

#[macro_use]
extern crate tracing;

pub use config::Config;
pub use driver::{BuildReport, CleanReport, Driver, Mode};
pub use shader::compile::{Compiler, Glslc};
