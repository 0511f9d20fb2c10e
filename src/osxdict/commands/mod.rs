//! The two execution modes. Both are pure passes: given a catalog, a
//! normalized plan, and a renderer, they write output and return; exit
//! codes and terminal concerns stay in the CLI layer.

pub mod list;
pub mod lookup;
