pub mod graph_storage;
