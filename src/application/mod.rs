pub mod process_upload;
