//! TypeScript AST builders used by the component generators.

mod imports;

pub use imports::Import;
