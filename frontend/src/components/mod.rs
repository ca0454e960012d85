pub mod add_invoice_dialog;
pub mod edit_invoice_dialog;
pub mod error_dialog;
pub mod filter_dialog;
pub mod invoice_dialog;
pub mod pagination;
pub mod skeleton_loader;
