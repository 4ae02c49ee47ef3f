//! `todo chart` command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::task::{ChartSupport, PriorityCounts, TaskStore};

const TEXT_BAR_MAX: usize = 40;

#[derive(Args)]
pub struct ChartArgs {
    /// Print the counts as JSON instead of drawing
    #[arg(long)]
    json: bool,
}

pub fn run(store: &TaskStore, args: ChartArgs) -> Result<()> {
    let counts = store.priority_counts();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    show(&mut stdout, &counts, &ChartSupport::detect())
}

/// Draw the chart if the terminal allows it, otherwise explain why and fall
/// back to plain text counts
pub fn show<W: Write>(out: &mut W, counts: &PriorityCounts, support: &ChartSupport) -> Result<()> {
    if counts.total() == 0 {
        writeln!(out, "Nothing to chart yet.")?;
        return Ok(());
    }

    match support {
        ChartSupport::Available => {
            out.flush()?;
            crate::tui::chart::draw_inline(counts)?;
        }
        ChartSupport::Unavailable(reason) => {
            writeln!(out, "Chart unavailable: {}", reason)?;
            write_text_chart(out, counts)?;
        }
    }
    Ok(())
}

/// Plain text rendition, one line per priority
pub fn write_text_chart<W: Write>(out: &mut W, counts: &PriorityCounts) -> io::Result<()> {
    let max = counts.iter().map(|(_, n)| n).max().unwrap_or(0);
    for (priority, n) in counts.iter() {
        let len = if max == 0 { 0 } else { n * TEXT_BAR_MAX / max };
        writeln!(out, "{:<7} {:>4} {}", priority.label(), n, "#".repeat(len))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> ChartSupport {
        ChartSupport::Unavailable("not a terminal".to_string())
    }

    #[test]
    fn test_empty_counts_print_nothing_to_chart() -> Result<()> {
        let mut out = Vec::new();
        show(&mut out, &PriorityCounts::default(), &ChartSupport::Available)?;
        assert_eq!(String::from_utf8(out)?, "Nothing to chart yet.\n");
        Ok(())
    }

    #[test]
    fn test_unavailable_falls_back_to_text() -> Result<()> {
        let counts = PriorityCounts {
            high: 2,
            medium: 0,
            low: 1,
        };
        let mut out = Vec::new();
        show(&mut out, &counts, &unavailable())?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Chart unavailable: not a terminal");
        assert!(lines[1].starts_with("High       2 #"));
        assert_eq!(lines[2], "Medium     0 ");
        assert!(lines[3].starts_with("Low        1 #"));
        Ok(())
    }

    #[test]
    fn test_text_bars_scale_to_largest() -> io::Result<()> {
        let counts = PriorityCounts {
            high: 4,
            medium: 2,
            low: 1,
        };
        let mut out = Vec::new();
        write_text_chart(&mut out, &counts)?;
        let text = String::from_utf8(out).unwrap_or_default();
        let bars: Vec<usize> = text
            .lines()
            .map(|l| l.chars().filter(|c| *c == '#').count())
            .collect();
        assert_eq!(bars, vec![TEXT_BAR_MAX, TEXT_BAR_MAX / 2, TEXT_BAR_MAX / 4]);
        Ok(())
    }
}
