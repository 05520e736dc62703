pub mod bar_chart;
pub mod force_graph;
pub mod surface;
