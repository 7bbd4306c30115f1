//! CLI commands for relkit
//!
//! - **bump**: rewrite the manifest version from pending changelog fragments
//! - **changelog**: consolidate fragments into a new changelog section
//! - **render**: fill an HTML template and rasterize it to a social image
//! - **household**: build situation JSON for the simulation engine

pub mod bump;
pub mod changelog;
pub mod household;
pub mod render;

pub use bump::run_bump;
pub use changelog::run_changelog;
pub use household::run_household;
pub use render::run_render;
