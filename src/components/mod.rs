pub mod network_graph;
pub mod stats_panel;
pub mod workspace;
