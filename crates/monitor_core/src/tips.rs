use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::domain::{Tip, TIP_CATALOG};

/// Source of tip choices. Production wraps a `rand` RNG; tests script it.
pub trait TipPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct RandomTips<R> {
    rng: R,
}

impl<R: Rng> RandomTips<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTips<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> TipPicker for RandomTips<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedTips {
    script: Vec<usize>,
    cursor: usize,
}

impl FixedTips {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl TipPicker for FixedTips {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()];
        self.cursor = self.cursor.wrapping_add(1);
        index % len
    }
}

pub fn pick_tip<P: TipPicker + ?Sized>(picker: &mut P) -> Tip {
    Tip::wrapping(picker.pick_index(TIP_CATALOG.len()))
}
