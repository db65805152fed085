//! Integration tests for Shadow Notes

mod notes_workflow;
mod parse_matrix;
mod support;
