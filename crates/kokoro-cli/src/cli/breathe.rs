use crate::cli::opt::Breathe;
use anyhow::Result;
use kokoro_core::breathing::session::{BreathingSession, TICK_PERIOD};
use kokoro_model::exercise::breathing::{BreathPhase, TimerSnapshot};
use kokoro_utils::tracing::TracingConfig;

fn phase_label(phase: BreathPhase) -> &'static str {
    match phase {
        BreathPhase::Inhale => "Breathe in",
        BreathPhase::Hold => "Hold",
        BreathPhase::Exhale => "Breathe out",
    }
}

/// One output line per second, the phase name is only repeated when a new phase begins.
fn second_line(snapshot: &TimerSnapshot) -> String {
    let position = snapshot.variant.locate(snapshot.elapsed_in_cycle);
    match position {
        Some(position) if position.second == 1 => {
            format!("{:<12}{}", phase_label(snapshot.phase), snapshot.phase_remaining)
        }
        _ => format!("{:<12}{}", "", snapshot.phase_remaining),
    }
}

pub(crate) async fn breathe(opt: Breathe) -> Result<()> {
    let _guard = opt
        .debug
        .then(|| {
            kokoro_utils::tracing::setup(
                TracingConfig::builder()
                    .package(env!("CARGO_PKG_NAME"))
                    .version(env!("CARGO_PKG_VERSION"))
                    .build(),
            )
        })
        .transpose()?;

    let variant = opt.variant;
    let cycles = u64::from(opt.cycles);
    println!(
        "{}: {} cycle(s) of {} seconds, ctrl-c to stop",
        variant.title(),
        opt.cycles,
        variant.cycle_length()
    );

    let session = BreathingSession::spawn(variant, TICK_PERIOD);
    let mut snapshots = session.subscribe();
    println!("\nCycle 1");
    println!("{}", second_line(&session.snapshot()));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::debug!("interrupted");
                break;
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *snapshots.borrow_and_update();
                if snapshot.cycles_completed >= cycles {
                    break;
                }
                if snapshot.elapsed_in_cycle == 1 {
                    println!("\nCycle {}", snapshot.cycles_completed + 1);
                }
                println!("{}", second_line(&snapshot));
            }
        }
    }

    let stopped = session.stop().await?;
    println!(
        "\nWell done. {} full cycle(s) in {} seconds.",
        stopped.cycles_completed, stopped.ticks
    );
    Ok(())
}
