use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use ipmapper_common::config::Config;
use ipmapper_core::collector::Outcome;
use ipmapper_core::pipeline::{self, MapOutcome};
use ipmapper_core::resolver::GeolocationResolver;
use ipmapper_core::resolver::maxmind::MaxMindGeolocator;

use crate::terminal::{colors, print, progress::ResolveProgress};

pub fn map(input: &Path, cfg: &Config) -> anyhow::Result<()> {
    print::header("opening database", cfg.quiet);
    let geolocator = MaxMindGeolocator::open(&cfg.database)?;
    print::aligned_line("Database", geolocator.path().display().to_string(), cfg.quiet);
    print::aligned_line("Input", input.display().to_string(), cfg.quiet);
    let resolver = GeolocationResolver::new(Box::new(geolocator));

    print::header("resolving addresses", cfg.quiet);
    let start_time = Instant::now();
    let progress = ResolveProgress::start(cfg.quiet)?;
    let outcome = pipeline::run(input, cfg, &resolver, &mut |p| {
        progress.update(p.index + 1, p.total);
        if p.outcome == Outcome::Malformed {
            progress.set_message(format!("skipped {}", p.address.yellow()));
        }
    });
    progress.finish();
    let outcome = outcome?;

    print_summary(&outcome, start_time.elapsed(), cfg.quiet);
    Ok(())
}

fn print_summary(outcome: &MapOutcome, total_time: Duration, q_level: u8) {
    let stats = &outcome.stats;
    print::header("map written", q_level);
    print::aligned_line("Tokens", outcome.tokens.to_string(), q_level);
    print::aligned_line("Distinct", stats.distinct.to_string(), q_level);
    print::aligned_line("Resolved", stats.resolved.to_string().green(), q_level);
    print::aligned_line("Not found", stats.not_found.to_string().yellow(), q_level);
    if stats.malformed > 0 {
        print::aligned_line("Malformed", stats.malformed.to_string().red(), q_level);
    }
    print::aligned_line(
        "Image",
        format!("{} ({}x{})", outcome.output.display(), outcome.map.width(), outcome.map.height()),
        q_level,
    );

    let plotted: ColoredString = format!("{} points", outcome.plotted).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Map complete: {plotted} plotted in {total_time}").color(colors::TEXT_DEFAULT);

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => print::print(&output.to_string()),
        _ => {}
    }
}
