pub mod puck;
