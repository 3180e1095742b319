pub mod condition;
pub mod history;
pub mod patient;
pub mod report;
pub mod request;
pub mod symptoms;
