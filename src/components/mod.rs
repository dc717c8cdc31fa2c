pub mod chip;
pub mod month_calendar;
pub mod recent_activity;
pub mod stats_card;
pub mod task_card;
