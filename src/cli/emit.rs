use crate::Batch;
use crate::Directory;
use crate::NUM_PLAYERS;
use crate::Policy;
use crate::Roster;
use crate::SAMPLES_EACH;
use crate::Sink;
use crate::TURNS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "emit")]
#[command(about = "Draw blind turn-order playouts for every permutator")]
pub struct Emit {
    #[arg(long, short, help = "Number of players (A, B, C, ...)", default_value_t = NUM_PLAYERS)]
    pub players: usize,
    #[arg(long, short, help = "Turns per playout", default_value_t = TURNS)]
    pub turns: usize,
    #[arg(long, short, help = "Playouts per permutator", default_value_t = SAMPLES_EACH)]
    pub samples: usize,
    #[arg(
        long = "policy",
        help = "Permutator to sample (uniform, avoid_turnback, generational); repeat for several, defaults to all"
    )]
    pub policies: Vec<Policy>,
    #[arg(long, short, help = "Append wait and adjacency analysis to each line", default_value_t = false)]
    pub analyze: bool,
    #[arg(long, short, help = "Directory to write the playouts and hints into", default_value = ".")]
    pub output: PathBuf,
}

impl Emit {
    pub fn batch(&self) -> crate::Result<Batch> {
        let policies = match self.policies.is_empty() {
            true => Policy::all().to_vec(),
            false => self.policies.clone(),
        };
        Batch::new(
            policies,
            Roster::new(self.players)?,
            self.turns,
            self.samples,
            self.analyze,
        )
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let ledger = self.batch()?.run()?;
        Directory::new(&self.output).save(&ledger)?;
        Ok(())
    }
}
