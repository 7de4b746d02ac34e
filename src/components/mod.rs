pub mod commit_message_display;
pub mod commit_type_guide;
pub mod files_list;
pub mod history_panel;
pub mod notice;
pub mod sidebar;
pub mod status_badge;
