pub const LCG_MULTIPLIER: i64 = 1_103_515_245;
pub const LCG_INCREMENT: i64 = 12_345;
pub const LCG_MASK: i64 = 0x7fff_ffff;

/// Linear congruential generator over a 31-bit state.
///
/// Arithmetic wraps in 64-bit signed integers before masking, so every seed
/// (including negative ones) yields a state in `0..=0x7fffffff`. Draws are
/// `state / 0x7fffffff` and may reach exactly 1.0.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    pub fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    pub fn next_state(&mut self) -> i64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state
    }
}

impl super::UniformSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.next_state() as f64 / LCG_MASK as f64
    }

    fn source_name(&self) -> &'static str {
        "lcg"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rng/lcg.rs"]
mod tests;
