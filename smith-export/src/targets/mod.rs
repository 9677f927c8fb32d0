//! Component generators, one per target format.

mod angular;
mod html;
mod react;
mod svelte;
mod vue;

pub use angular::{Angular, angular_selector};
pub use html::Html;
pub use react::React;
pub use svelte::Svelte;
pub use vue::Vue;
