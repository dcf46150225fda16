//! Board UI components.

pub mod add_card_form;
pub mod board_column;
pub mod card_tile;
pub mod notice_stack;
