pub mod aggregate;
pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod console;
pub mod dataset;
pub mod dom;
pub mod output;
pub mod page;
pub mod render;
pub mod report;

#[cfg(test)]
mod tests;
