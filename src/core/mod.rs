pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod dropoff;
pub mod pickup;
