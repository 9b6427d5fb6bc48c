pub mod extract;
pub mod rewrite;
