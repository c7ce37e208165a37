pub mod army_manager;
pub mod production_manager;
pub mod resource_manager;
pub mod scout_manager;
pub mod wave_manager;
pub mod worker_manager;
