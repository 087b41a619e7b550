use clap::{Parser, Subcommand};
use kokoro_model::exercise::breathing::BreathingVariant;

#[derive(Debug, Parser)]
#[command(name = "kokoro", about = "Breathe, ground yourself and take a moment")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Follow a guided breathing exercise
    Breathe(Breathe),

    /// Show the available exercises
    Exercises(Exercises),
}

#[derive(Debug, Parser)]
pub(crate) struct Breathe {
    #[arg(short, long, default_value = "box", help = "One of box, stress, anxiety, panic")]
    pub(crate) variant: BreathingVariant,

    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) cycles: u32,

    #[arg(short, long)]
    pub(crate) debug: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Exercises {
    #[arg(long)]
    pub(crate) json: bool,
}
