pub mod demo;
pub mod eigen;
pub mod report;
