mod about;
mod contact;
mod product;

pub use about::*;
pub use contact::*;
pub use product::*;
