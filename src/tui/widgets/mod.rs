pub mod awards_view;
pub mod documents_view;
pub mod folder_grid;
pub mod help_popup;
pub mod innovations_view;
pub mod news_view;
pub mod overview_view;
pub mod pagination;
pub mod people_view;
pub mod search_dialog;
pub mod stats_view;
pub mod status_bar;
