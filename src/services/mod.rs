pub mod expression;
pub mod gantt_diagram;
pub mod histogram;
pub mod monte_carlo;
pub mod phases_yaml;
pub mod simulation;
pub mod simulation_types;
