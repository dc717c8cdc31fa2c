pub mod activity;
pub mod analytics;
pub mod appointment;
pub mod calendar;
pub mod catalog;
pub mod form;
pub mod list_view;
pub mod mail;
pub mod patient;
pub mod preferences;
pub mod task;
pub mod timer;
pub mod trash;
