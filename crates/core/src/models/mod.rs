pub mod account;
pub mod calendar;
pub mod goal;
pub mod growth;
pub mod plan;
pub mod projection;
