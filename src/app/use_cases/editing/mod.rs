//! Use-Cases für das Graph-Editing.

mod add_node;
mod clear;
mod connect;

pub use add_node::add_node_at_position;
pub use clear::clear_graph;
pub use connect::connect_tool_pick_node;
