// Library for tests to access modules

pub mod config;
pub mod counter;
pub mod models;
pub mod reader;
pub mod report;
pub mod version;
