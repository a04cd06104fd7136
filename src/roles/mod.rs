mod category;
mod load;
mod model;
mod parse;

pub use category::Category;
pub use load::{load_builtin_dataset, load_dataset_file};
pub use model::{Edge, Node, NodeId, RoleGraph};
