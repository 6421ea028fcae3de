pub mod airport_graph;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
