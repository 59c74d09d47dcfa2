use std::cell::Cell;

use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress bar for the lookup loop, drawn by the `tracing-indicatif` layer.
///
/// With any quiet level the bar is backed by a disabled span and every update
/// is a no-op.
pub struct ResolveProgress {
    span: Span,
    length_set: Cell<bool>,
}

impl ResolveProgress {
    pub fn start(q_level: u8) -> anyhow::Result<Self> {
        if q_level > 0 {
            return Ok(Self {
                span: Span::none(),
                length_set: Cell::new(false),
            });
        }

        let span = info_span!("resolving", indicatif.pb_show = true);
        span.pb_set_style(&progress_style()?);
        span.pb_set_message(&format!("{}", "looking up addresses".italic()));
        span.pb_start();

        Ok(Self {
            span,
            length_set: Cell::new(false),
        })
    }

    /// `done` addresses out of `total` have been looked up.
    pub fn update(&self, done: usize, total: usize) {
        if !self.length_set.replace(true) {
            self.span.pb_set_length(total as u64);
        }
        self.span.pb_set_position(done as u64);
    }

    pub fn set_message(&self, msg: String) {
        self.span.pb_set_message(&msg);
    }

    pub fn finish(self) {
        drop(self.span);
    }
}

fn progress_style() -> anyhow::Result<ProgressStyle> {
    Ok(
        ProgressStyle::with_template("{spinner:.blue} {msg} {bar:30.green/bright_black} {pos}/{len}")?
            .tick_strings(TICK_STRINGS),
    )
}
