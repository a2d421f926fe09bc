pub mod directions;
pub mod planner;
pub mod proximity;
pub mod static_map;
