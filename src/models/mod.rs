//! Domain models

pub mod category;
pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;
pub mod user;
pub mod work_center;
