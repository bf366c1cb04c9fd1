//! Unit tests for catalog construction, graph analysis, identifier
//! resolution, and filtering.

mod helpers;
