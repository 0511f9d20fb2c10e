use crate::catalog::DictionaryCatalog;
use crate::error::Result;
use crate::plan::QueryPlan;
use crate::render::Renderer;

/// Looks every word up in every dictionary, words outer and dictionaries
/// inner, and renders each pair. A missing definition is rendered as an
/// empty one, not skipped.
pub fn run(
    catalog: &DictionaryCatalog,
    plan: &QueryPlan,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    for word in &plan.words {
        for short_name in &plan.dictionaries {
            let name = catalog.display_name(short_name)?;
            let definition = catalog.lookup(short_name, word).unwrap_or_default();
            renderer.word(short_name, name, word, &definition)?;
        }
    }
    Ok(())
}
