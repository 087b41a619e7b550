use crate::cli::opt::Exercises;
use anyhow::Result;
use kokoro_core::exercise;
use kokoro_model::exercise::ExerciseCatalog;
use std::fmt::{self, Write};

fn format_catalog(catalog: &ExerciseCatalog) -> Result<String, fmt::Error> {
    let mut out = String::from("Breathing\n");
    for breathing in &catalog.breathing {
        let steps = breathing
            .schedule
            .iter()
            .map(|step| format!("{} {}", step.phase, step.seconds))
            .collect::<Vec<_>>()
            .join(", ");
        let variant: &'static str = breathing.variant.into();
        writeln!(out, "  {:<16}{variant:<8}{steps}", breathing.title)?;
    }

    out.push_str("\n5-4-3-2-1 Grounding\n");
    for step in &catalog.grounding {
        writeln!(out, "  {}: {}", step.prompt, step.hint)?;
    }

    writeln!(
        out,
        "\nGratitude\n  {}: {} slots",
        catalog.gratitude.prompt, catalog.gratitude.slots
    )?;
    Ok(out)
}

pub(crate) fn exercises(opt: &Exercises) -> Result<()> {
    let catalog = exercise::catalog();
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", format_catalog(&catalog)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_catalog() {
        let text = format_catalog(&exercise::catalog()).unwrap();
        assert!(text.contains("  Box Breathing   box     inhale 4, hold 4, exhale 4, hold 4\n"));
        assert!(text.contains("  5 things you can see: Look around and name them\n"));
        assert!(text.ends_with(": 3 slots\n"));
    }
}
