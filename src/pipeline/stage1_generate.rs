use crate::model::{Category, Item};
use crate::rng::UniformSource;

/// Two draws per item, value first and category second.
pub fn generate_items(size: usize, source: &mut dyn UniformSource) -> Vec<Item> {
    let mut items = Vec::with_capacity(size);
    for id in 0..size {
        let value = source.next_unit();
        let category = Category::from_draw(source.next_unit());
        items.push(Item::new(id, value, category));
    }
    items
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_generate.rs"]
mod tests;
