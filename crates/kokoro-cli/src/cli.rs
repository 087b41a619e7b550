pub(crate) mod opt;
mod breathe;
mod exercises;

use crate::cli::opt::Commands;
use anyhow::Error;
use breathe::breathe;
use exercises::exercises;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Breathe(o) => breathe(o).await,
        Commands::Exercises(o) => exercises(&o),
    }
}
