pub mod rewrite;
pub mod walk;
