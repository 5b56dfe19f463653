//! Small helpers shared by services and models.

pub mod money;
pub mod password;
pub mod token;
pub mod validate;
