pub(crate) mod lexer;
pub mod mesh_builder;
pub mod mtl;
pub mod obj;
