mod deserialize;
mod exec;
mod fstring;
mod identifier;
mod sql;

pub mod expression;
