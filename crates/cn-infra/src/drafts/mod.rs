mod file_draft_store;

pub use file_draft_store::FileDraftStore;
