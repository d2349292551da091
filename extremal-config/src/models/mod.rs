/// Scanner tuning model
pub mod scanner;
