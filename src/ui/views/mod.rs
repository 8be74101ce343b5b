pub mod banner;
pub mod help;
pub mod history;
pub mod pyramid;
