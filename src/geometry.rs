pub mod distances2;
pub mod point;
