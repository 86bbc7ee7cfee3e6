pub mod calculator;
pub mod config;
pub mod consts;
pub mod error;
pub mod ledger;
pub mod pages;
pub mod payroll;
pub mod policy;
pub mod utils;
