use crate::catalog::DictionaryCatalog;
use crate::error::Result;
use crate::plan::QueryPlan;
use crate::render::Renderer;

/// Emits one list entry per dictionary in plan order.
pub fn run(
    catalog: &DictionaryCatalog,
    plan: &QueryPlan,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    for short_name in &plan.dictionaries {
        let name = catalog.display_name(short_name)?;
        renderer.list_item(short_name, name)?;
    }
    Ok(())
}
