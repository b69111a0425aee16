pub mod lcg;
pub mod system;

pub use lcg::Lcg;
pub use system::SystemSource;

/// Source of uniform draws for item generation.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;

    fn source_name(&self) -> &'static str;
}

/// Seeded runs get the reproducible LCG, unseeded runs the thread-local generator.
pub fn select_source(seed: Option<i64>) -> Box<dyn UniformSource> {
    match seed {
        Some(seed) => Box::new(Lcg::new(seed)),
        None => Box::new(SystemSource::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rng/mod.rs"]
mod tests;
