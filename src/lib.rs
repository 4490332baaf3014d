pub mod args;
pub mod commands;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod output;
pub mod permissions;
pub mod sheet;
pub mod subsidy;
pub mod visuals;
pub mod writer;
