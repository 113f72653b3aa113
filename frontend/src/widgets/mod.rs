mod category_dropdown;
mod field;
mod file_uploader;
mod form_card;
mod header;
mod page_background;

pub use category_dropdown::CategoryDropdown;
pub use field::FormField;
pub use file_uploader::FileUploader;
pub use form_card::FormCard;
pub use header::Header;
pub use page_background::PageBackground;
