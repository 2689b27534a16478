pub mod app;
pub mod contact_form;
pub mod dpi_tester;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod reveal_card;
pub mod showcase;
pub mod styles;
pub mod toast_host;
