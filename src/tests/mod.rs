// Test modules for Microlearn
// Each module tests the corresponding source module

mod helpers;
mod session_tests;
mod tui_tests;
