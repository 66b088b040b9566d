pub mod snapshot;
pub mod snapshot_view;
