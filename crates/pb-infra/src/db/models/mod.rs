pub mod document_row;

pub use document_row::DocumentRow;
