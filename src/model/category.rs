#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    A,
    B,
    C,
    D,
}

/// Fixed category order; generation indexes into it by random draw.
pub const CATEGORIES: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }

    /// Maps a draw in [0, 1] onto a category. A draw of exactly 1.0 lands on the last one.
    pub fn from_draw(draw: f64) -> Self {
        let idx = (draw * CATEGORIES.len() as f64) as usize;
        CATEGORIES[idx.min(CATEGORIES.len() - 1)]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
