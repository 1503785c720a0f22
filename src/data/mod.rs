pub mod iteration;
pub mod sequence;
pub mod table;
