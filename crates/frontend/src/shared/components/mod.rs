pub mod bulk_action_select;
pub mod charts;
pub mod column_picker;
pub mod confirm_dialog;
pub mod delete_confirm;
pub mod form_field;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod toast_stack;
