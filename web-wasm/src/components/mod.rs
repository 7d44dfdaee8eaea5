pub mod header;
pub mod study_card;
pub mod add_form;
pub mod deck_list;
pub mod contact_form;
