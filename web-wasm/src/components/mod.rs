pub mod analyze_button;
pub mod bill_result;
pub mod header;
pub mod loading;
pub mod toast;
pub mod upload_area;
