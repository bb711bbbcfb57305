pub mod document_mapper;

pub use document_mapper::DocumentRowMapper;
