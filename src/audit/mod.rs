pub mod annotate;
pub mod checker;
pub mod helpers;
pub mod parse;
pub mod result;
