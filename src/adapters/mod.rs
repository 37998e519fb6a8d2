// Adapters layer: turns untyped input (JSON text, files, stdin) into the domain model.

pub mod json;
