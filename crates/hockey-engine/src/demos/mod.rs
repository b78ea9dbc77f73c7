pub mod air_hockey;
