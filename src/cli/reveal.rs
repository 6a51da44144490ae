use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reveal")]
#[command(about = "Replace the tokens in a playouts file with the permutators behind them")]
pub struct Unveil {
    #[arg(required = true, help = "A playouts_<timestamp>.txt file written by emit")]
    pub playouts: PathBuf,
}

impl Unveil {
    pub fn run(&self) -> anyhow::Result<()> {
        let reveal = crate::Reveal::open(&self.playouts)?;
        println!("{}", reveal);
        Ok(())
    }
}
