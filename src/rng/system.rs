use rand::Rng;
use rand::rngs::ThreadRng;

pub struct SystemSource {
    rng: ThreadRng,
}

impl SystemSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl super::UniformSource for SystemSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn source_name(&self) -> &'static str {
        "system"
    }
}
