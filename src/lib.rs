//! skel is a template-set instantiation tool for project scaffolding.
//! It resolves a parameter document, walks a template tree, evaluates both
//! entry paths and entry contents as templates, and writes the resulting
//! tree into a destination directory.

/// Command-line interface module for the skel application
pub mod cli;

/// Common constants: file names, marker suffix, default locations
pub mod constants;

/// External editor invocation over the parameter document working copy
pub mod editor;

/// Error types and handling for the skel application
pub mod error;

/// Output path resolution for template entries
pub mod paths;

/// User interaction for the edit-retry loop
pub mod prompt;

/// Template parsing and rendering functionality
/// Handles the actual template processing logic
pub mod renderer;

/// Parameter document loading, decoding and the interactive edit loop
pub mod store;

/// Template set layout and lookup
pub mod template_set;

/// Template tree traversal and output generation
/// Combines all components to generate the final output
pub mod walker;
