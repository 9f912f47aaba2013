use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use mzif::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders engine progress on stderr.
///
/// Per-entry lines are always printed. When the bar is hidden (disabled in
/// config, or stderr is not a terminal) they go straight to stdout instead of
/// being interleaved above the bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new(show_bar: bool) -> Self {
        let pb = if show_bar {
            let pb = ProgressBar::new(0).with_style(Self::spinner_style());
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb_guard.reset();
                    pb_guard.set_length(0);
                    pb_guard.set_style(Self::spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(name);
                }
                Progress::PhaseFinish => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_with_message("✓ Done");
                }
                Progress::TaskStart { total_steps } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.reset();
                    pb_guard.set_length(total_steps);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                }
                Progress::TaskAdvance { position } => {
                    pb_guard.set_position(position);
                }
                Progress::TaskFinish => {
                    let len = pb_guard.length().unwrap_or(0);
                    if pb_guard.position() < len {
                        pb_guard.set_position(len);
                    }
                }
                Progress::EntryParsed {
                    id,
                    percent,
                    models,
                    skipped,
                } => {
                    emit_line(&pb_guard, format_entry_parsed(&id, percent, models, skipped));
                }
                Progress::EntrySplit {
                    id,
                    total,
                    native,
                    decoy,
                } => {
                    emit_line(&pb_guard, format_entry_split(&id, total, native, decoy));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{msg:<20} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new(true)
    }
}

fn emit_line(pb: &ProgressBar, line: String) {
    if pb.is_hidden() {
        println!("{}", line);
    } else {
        pb.println(line);
    }
}

pub fn format_entry_parsed(id: &str, percent: Option<u8>, models: usize, skipped: usize) -> String {
    let percent = percent.map_or_else(|| "?".to_string(), |p| p.to_string());
    let mut line = format!("{:>8}%]  {}  {} models", percent, id, models);
    if skipped > 0 {
        line.push_str(&format!(" ({} skipped)", skipped));
    }
    line
}

pub fn format_entry_split(id: &str, total: usize, native: usize, decoy: usize) -> String {
    format!("{}  {} models split {}/{}", id, total, native, decoy)
}
