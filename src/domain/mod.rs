pub mod description;
pub mod obstacles;
pub mod regions;
