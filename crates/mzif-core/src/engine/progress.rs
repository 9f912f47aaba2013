#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskAdvance { position: u64 },
    TaskFinish,

    /// An entry was closed by the parser. `percent` is the share of input
    /// bytes consumed so far, when the input size is known.
    EntryParsed {
        id: String,
        percent: Option<u8>,
        models: usize,
        skipped: usize,
    },
    EntrySplit {
        id: String,
        total: usize,
        native: usize,
        decoy: usize,
    },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

/// Integer percentage of `done` over `total`, clamped to 100.
pub fn percent_of(done: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (u128::from(done) * 100 / u128::from(total)).min(100);
    u8::try_from(pct).ok()
}
