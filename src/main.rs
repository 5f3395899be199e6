use anyhow::Result;

#[macro_use]
extern crate serde_derive;

mod cache;
mod cancel;
mod cli;
mod common;
mod config;
mod error;
mod source;
mod youtube;

fn main() -> Result<()> {
    cli::main()?;
    Ok(())
}
