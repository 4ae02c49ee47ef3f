//! todo-board library - priority-ordered task store with CLI, text menu and board front ends

pub mod cli;
pub mod config;
pub mod task;
pub mod tui;
